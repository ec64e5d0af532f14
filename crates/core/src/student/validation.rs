//! Validation for student create/update input.

use rust_decimal::Decimal;

use super::error::StudentError;
use crate::calendar::Month;
use crate::payment::CLASS_SUBJECT_PREFIX;
use crate::school::roster;

/// Fields of a student record that carry business rules.
#[derive(Debug, Clone)]
pub struct StudentFields<'a> {
    /// Normalized student ID.
    pub id: &'a str,
    /// Student name.
    pub name: &'a str,
    /// Class number.
    pub class: i32,
    /// Section name.
    pub section: &'a str,
    /// Roll number.
    pub roll: i32,
    /// Monthly tuition fee.
    pub tuition_fee: Decimal,
    /// Monthly vehicle fee.
    pub vehicle_fee: Option<Decimal>,
    /// Admission month name.
    pub admission_month: Option<&'a str>,
}

/// Trims and upper-cases a student ID.
#[must_use]
pub fn normalize_student_id(id: &str) -> String {
    id.trim().to_uppercase()
}

/// Checks student fields against the roster and fee rules.
///
/// # Errors
///
/// Returns the first rule the fields violate.
pub fn validate_student(fields: &StudentFields<'_>) -> Result<(), StudentError> {
    if fields.id.is_empty() {
        return Err(StudentError::MissingField("id"));
    }
    if fields.id.starts_with(CLASS_SUBJECT_PREFIX) {
        return Err(StudentError::ReservedId);
    }
    if fields.name.trim().is_empty() {
        return Err(StudentError::MissingField("name"));
    }
    if fields.section.is_empty() {
        return Err(StudentError::MissingField("section"));
    }
    if !roster::is_valid_class(fields.class) {
        return Err(StudentError::UnknownClass(fields.class));
    }
    if !roster::is_valid_section(fields.class, fields.section) {
        return Err(StudentError::UnknownSection {
            class: fields.class,
            section: fields.section.to_string(),
        });
    }
    if fields.roll <= 0 {
        return Err(StudentError::InvalidRoll);
    }
    if fields.tuition_fee < Decimal::ZERO {
        return Err(StudentError::NegativeFee("Tuition fee"));
    }
    if fields.vehicle_fee.is_some_and(|fee| fee < Decimal::ZERO) {
        return Err(StudentError::NegativeFee("Vehicle fee"));
    }
    if let Some(month) = fields.admission_month
        && Month::from_name(month).is_none()
    {
        return Err(StudentError::InvalidAdmissionMonth(month.to_string()));
    }
    Ok(())
}
