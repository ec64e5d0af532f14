//! Classes and their named sections.

/// Every class the school runs, with its sections in display order.
pub const CLASS_SECTIONS: &[(i32, &[&str])] = &[
    (
        6,
        &[
            "GOLAP",
            "SHAPLA",
            "BELI",
            "SHEULY",
            "TAGAR",
            "BAKUL",
            "RAJANIGANDHA",
        ],
    ),
    (7, &["DOYEL", "KOYEL", "MOYNA", "TIYA", "EAGLE", "KOKIL"]),
    (8, &["SHITOLOKKHA", "MEGHNA", "PADMA", "JAMUNA"]),
    (9, &["LAL", "SABUJ"]),
    (10, &["AAM", "JAM"]),
];

/// Sections of a class, `None` if the class does not exist.
#[must_use]
pub fn sections_for(class: i32) -> Option<&'static [&'static str]> {
    CLASS_SECTIONS
        .iter()
        .find(|(c, _)| *c == class)
        .map(|(_, sections)| *sections)
}

/// Returns true if the class exists.
#[must_use]
pub fn is_valid_class(class: i32) -> bool {
    sections_for(class).is_some()
}

/// Returns true if `section` belongs to `class`.
#[must_use]
pub fn is_valid_section(class: i32, section: &str) -> bool {
    sections_for(class).is_some_and(|sections| sections.contains(&section))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(6, "GOLAP", true)]
    #[case(6, "RAJANIGANDHA", true)]
    #[case(7, "GOLAP", false)]
    #[case(10, "JAM", true)]
    #[case(10, "jam", false)]
    #[case(5, "GOLAP", false)]
    fn test_is_valid_section(#[case] class: i32, #[case] section: &str, #[case] expected: bool) {
        assert_eq!(is_valid_section(class, section), expected);
    }

    #[test]
    fn test_classes_six_through_ten() {
        let classes: Vec<i32> = CLASS_SECTIONS.iter().map(|(c, _)| *c).collect();
        assert_eq!(classes, vec![6, 7, 8, 9, 10]);
        assert!(is_valid_class(8));
        assert!(!is_valid_class(11));
        assert_eq!(sections_for(9), Some(&["LAL", "SABUJ"][..]));
    }
}
