//! Student domain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::StudentError;

/// Enrollment status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentStatus {
    /// Currently enrolled.
    #[default]
    Active,
    /// Left the school.
    Transferred,
}

impl StudentStatus {
    /// Status as stored.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Transferred => "transferred",
        }
    }

    /// Reads a stored status. Only the exact value "transferred" marks a
    /// student as gone; anything else counts as active.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == "transferred" {
            Self::Transferred
        } else {
            Self::Active
        }
    }
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudentStatus {
    type Err = StudentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "transferred" => Ok(Self::Transferred),
            other => Err(StudentError::InvalidStatus(other.to_string())),
        }
    }
}

/// What the due-month calculator needs to know about a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDueInfo {
    /// Student identifier.
    pub id: String,
    /// Admission month name as stored; may be absent or unrecognized.
    pub admission_month: Option<String>,
    /// Enrollment status.
    pub status: StudentStatus,
}

impl StudentDueInfo {
    /// Creates an active student with the given admission month.
    #[must_use]
    pub fn active(id: impl Into<String>, admission_month: Option<&str>) -> Self {
        Self {
            id: id.into(),
            admission_month: admission_month.map(str::to_string),
            status: StudentStatus::Active,
        }
    }
}
