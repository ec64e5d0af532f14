//! Student validation errors.

use thiserror::Error;

/// Student-related validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudentError {
    /// A required field is empty.
    #[error("Missing required student field: {0}")]
    MissingField(&'static str),

    /// The class is not one the school runs.
    #[error("Unknown class: {0}")]
    UnknownClass(i32),

    /// The section does not belong to the class.
    #[error("Section {section} does not exist in class {class}")]
    UnknownSection {
        /// Class number.
        class: i32,
        /// Section name.
        section: String,
    },

    /// Roll number must be positive.
    #[error("Roll must be a positive number")]
    InvalidRoll,

    /// Fee amounts cannot be negative.
    #[error("{0} cannot be negative")]
    NegativeFee(&'static str),

    /// Admission month is not a month name.
    #[error("Invalid admission month: {0}")]
    InvalidAdmissionMonth(String),

    /// Status is neither active nor transferred.
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// Student IDs starting with the class-payment prefix are reserved.
    #[error("Student ID cannot start with CLASS-")]
    ReservedId,
}
