//! Payment domain types.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::PaymentError;
use crate::school::roster;

/// Prefix of synthetic identifiers for class-section payments.
pub const CLASS_SUBJECT_PREFIX: &str = "CLASS-";

/// Month value stored for fees that are not tied to a month.
pub const NOT_APPLICABLE_MONTH: &str = "N/A";

/// Fee types charged per student.
pub const STUDENT_FEE_TYPES: [&str; 6] = [
    "TUITION FEE",
    "VEHICLE FEE",
    "ADMISSION",
    "RE-ADMISSION",
    "HALF YEARLY EXAM",
    "YEARLY EXAM",
];

/// Fee types charged per class-section.
pub const CLASS_FEE_TYPES: [&str; 10] = [
    "MONTHLY TEST",
    "DIARY",
    "TIE",
    "BAG",
    "SPORTS",
    "ID CARD",
    "ID CARD HOLDER",
    "ID CARD RIBBON",
    "MILAD",
    "OTHERS",
];

/// Category of a payment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FeeType {
    /// Monthly tuition; the only fee that drives due months.
    Tuition,
    /// Monthly school transport.
    Vehicle,
    /// One-off admission.
    Admission,
    /// One-off re-admission.
    ReAdmission,
    /// Half-yearly exam.
    HalfYearlyExam,
    /// Yearly exam.
    YearlyExam,
    /// Monthly class test.
    MonthlyTest,
    /// Diary.
    Diary,
    /// Tie.
    Tie,
    /// Bag.
    Bag,
    /// Sports.
    Sports,
    /// ID card.
    IdCard,
    /// ID card holder.
    IdCardHolder,
    /// ID card ribbon.
    IdCardRibbon,
    /// Milad.
    Milad,
    /// Other class charges.
    Others,
    /// A tag this backend does not recognize.
    Other(String),
}

impl FeeType {
    /// Parses a fee-type tag. Unknown tags are preserved as `Other`.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag {
            "TUITION FEE" => Self::Tuition,
            "VEHICLE FEE" => Self::Vehicle,
            "ADMISSION" => Self::Admission,
            "RE-ADMISSION" => Self::ReAdmission,
            "HALF YEARLY EXAM" => Self::HalfYearlyExam,
            "YEARLY EXAM" => Self::YearlyExam,
            "MONTHLY TEST" => Self::MonthlyTest,
            "DIARY" => Self::Diary,
            "TIE" => Self::Tie,
            "BAG" => Self::Bag,
            "SPORTS" => Self::Sports,
            "ID CARD" => Self::IdCard,
            "ID CARD HOLDER" => Self::IdCardHolder,
            "ID CARD RIBBON" => Self::IdCardRibbon,
            "MILAD" => Self::Milad,
            "OTHERS" => Self::Others,
            other => Self::Other(other.to_string()),
        }
    }

    /// Tag as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Tuition => "TUITION FEE",
            Self::Vehicle => "VEHICLE FEE",
            Self::Admission => "ADMISSION",
            Self::ReAdmission => "RE-ADMISSION",
            Self::HalfYearlyExam => "HALF YEARLY EXAM",
            Self::YearlyExam => "YEARLY EXAM",
            Self::MonthlyTest => "MONTHLY TEST",
            Self::Diary => "DIARY",
            Self::Tie => "TIE",
            Self::Bag => "BAG",
            Self::Sports => "SPORTS",
            Self::IdCard => "ID CARD",
            Self::IdCardHolder => "ID CARD HOLDER",
            Self::IdCardRibbon => "ID CARD RIBBON",
            Self::Milad => "MILAD",
            Self::Others => "OTHERS",
            Self::Other(tag) => tag,
        }
    }

    /// Charged per student.
    #[must_use]
    pub fn is_student_fee(&self) -> bool {
        matches!(
            self,
            Self::Tuition
                | Self::Vehicle
                | Self::Admission
                | Self::ReAdmission
                | Self::HalfYearlyExam
                | Self::YearlyExam
        )
    }

    /// Charged per class-section.
    #[must_use]
    pub fn is_class_fee(&self) -> bool {
        !self.is_student_fee() && !matches!(self, Self::Other(_))
    }

    /// Not tied to a month; recorded with `N/A`.
    #[must_use]
    pub fn is_one_off(&self) -> bool {
        matches!(
            self,
            Self::Admission | Self::ReAdmission | Self::HalfYearlyExam | Self::YearlyExam
        )
    }
}

impl fmt::Display for FeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FeeType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FeeType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::parse(&String::deserialize(deserializer)?))
    }
}

/// The month field of a payment: one name or a list of names.
///
/// Names are kept as recorded, so malformed values survive a round trip and
/// are simply ignored by calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaymentMonths {
    /// A single month name.
    Single(String),
    /// Several month names.
    Multiple(Vec<String>),
}

impl PaymentMonths {
    /// The month used for due calculations: the value itself, or element 0 of a list.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(name) => Some(name),
            Self::Multiple(names) => names.first().map(String::as_str),
        }
    }

    /// Whether any listed month equals `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        match self {
            Self::Single(month) => month == name,
            Self::Multiple(names) => names.iter().any(|month| month == name),
        }
    }

    /// All listed names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::Single(name) => vec![name.as_str()],
            Self::Multiple(names) => names.iter().map(String::as_str).collect(),
        }
    }

    /// True when no month is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(name) => name.trim().is_empty(),
            Self::Multiple(names) => names.is_empty(),
        }
    }
}

/// Who a payment is for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaymentSubject {
    /// An individual student.
    Student(String),
    /// A whole class-section.
    Class {
        /// Class number.
        class: i32,
        /// Section name.
        section: String,
    },
}

impl PaymentSubject {
    /// Parses a payment's `student_id`. `CLASS-<class>-<section>` is a class
    /// payment; anything else names a student.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::InvalidClassSubject` for a `CLASS-` identifier
    /// whose class-section is not on the roster.
    pub fn parse(raw: &str) -> Result<Self, PaymentError> {
        let Some(rest) = raw.strip_prefix(CLASS_SUBJECT_PREFIX) else {
            return Ok(Self::Student(raw.to_string()));
        };

        let invalid = || PaymentError::InvalidClassSubject(raw.to_string());
        let (class, section) = rest.split_once('-').ok_or_else(invalid)?;
        let class: i32 = class.parse().map_err(|_| invalid())?;
        if !roster::is_valid_section(class, section) {
            return Err(invalid());
        }

        Ok(Self::Class {
            class,
            section: section.to_string(),
        })
    }

    /// The identifier stored in `student_id`.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            Self::Student(id) => id.clone(),
            Self::Class { class, section } => format!("{CLASS_SUBJECT_PREFIX}{class}-{section}"),
        }
    }

    /// Returns true for class-section payments.
    #[must_use]
    pub const fn is_class(&self) -> bool {
        matches!(self, Self::Class { .. })
    }
}

/// A payment as seen by fee calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord {
    /// Student ID or class-payment identifier.
    pub student_id: String,
    /// Fee category.
    pub fee_type: FeeType,
    /// Year the payment applies to.
    pub year: i32,
    /// Month(s) paid for; `None` when missing from the record.
    pub month: Option<PaymentMonths>,
    /// Amount paid.
    pub amount: Decimal,
}
