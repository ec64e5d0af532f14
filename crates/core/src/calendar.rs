//! Calendar months as the school records them.
//!
//! Payments and admissions store month *names* ("January" .. "December").
//! Lookup is exact and case-sensitive.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    /// January.
    January,
    /// February.
    February,
    /// March.
    March,
    /// April.
    April,
    /// May.
    May,
    /// June.
    June,
    /// July.
    July,
    /// August.
    August,
    /// September.
    September,
    /// October.
    October,
    /// November.
    November,
    /// December.
    December,
}

/// The month-name table, in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returned when a string is not one of the twelve month names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized month name: {0}")]
pub struct UnknownMonth(pub String);

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Zero-based index (January = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Month at a zero-based index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Looks up a month by its exact name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        MONTH_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .and_then(Self::from_index)
    }

    /// Month of a date.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        // month0() is always 0..=11
        Self::ALL[date.month0() as usize]
    }

    /// English month name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self as usize]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = UnknownMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownMonth(s.to_string()))
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Zero-based index of a month name, `-1` when the name is not recognized.
///
/// The due calculator relies on the `-1` sentinel.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn month_index_of(name: &str) -> i32 {
    Month::from_name(name).map_or(-1, |month| month.index() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("January", Some(Month::January))]
    #[case("December", Some(Month::December))]
    #[case("june", None)]
    #[case(" March", None)]
    #[case("Xmas", None)]
    #[case("", None)]
    fn test_from_name(#[case] name: &str, #[case] expected: Option<Month>) {
        assert_eq!(Month::from_name(name), expected);
    }

    #[test]
    fn test_index_matches_table() {
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.index(), i);
            assert_eq!(month.name(), MONTH_NAMES[i]);
            assert_eq!(Month::from_index(i), Some(*month));
        }
        assert_eq!(Month::from_index(12), None);
    }

    #[test]
    fn test_month_index_of_sentinel() {
        assert_eq!(month_index_of("March"), 2);
        assert_eq!(month_index_of("N/A"), -1);
    }

    #[test]
    fn test_month_of_date() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(Month::of(date), Month::December);
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&Month::February).unwrap();
        assert_eq!(json, "\"February\"");

        let month: Month = serde_json::from_str("\"October\"").unwrap();
        assert_eq!(month, Month::October);

        assert!(serde_json::from_str::<Month>("\"Octobre\"").is_err());
    }
}
