//! Payment validation errors.

use thiserror::Error;

/// Payment-related validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// A required field is empty.
    #[error("Missing required payment field: {0}")]
    MissingField(&'static str),

    /// Fee type is not one the school charges.
    #[error("Unknown fee type: {0}")]
    UnknownFeeType(String),

    /// Student fee recorded against a class, or the reverse.
    #[error("Fee type {fee_type} cannot be recorded for a {subject} payment")]
    FeeTypeMismatch {
        /// Fee type tag.
        fee_type: String,
        /// "student" or "class".
        subject: &'static str,
    },

    /// Monthly fee without any month selected.
    #[error("Please select at least one month for {0}")]
    MonthRequired(String),

    /// Month is not a month name.
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// Amount is negative.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// Year is not plausible.
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    /// `CLASS-` identifier that does not name a roster class-section.
    #[error("Invalid class payment identifier: {0}")]
    InvalidClassSubject(String),
}
