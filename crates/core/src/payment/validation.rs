//! Rules for recording a new payment.

use rust_decimal::Decimal;

use super::error::PaymentError;
use super::types::{FeeType, NOT_APPLICABLE_MONTH, PaymentMonths, PaymentSubject};
use crate::calendar::Month;

/// A payment about to be recorded.
#[derive(Debug, Clone)]
pub struct NewPayment<'a> {
    /// Receipt number.
    pub receipt_no: &'a str,
    /// Year the payment applies to.
    pub year: i32,
    /// Who pays.
    pub subject: &'a PaymentSubject,
    /// Fee category.
    pub fee_type: &'a FeeType,
    /// Month(s) as submitted.
    pub month: Option<&'a PaymentMonths>,
    /// Amount.
    pub amount: Decimal,
}

/// Validates a new payment and returns the month value to store.
///
/// One-off fees always store `N/A`. Monthly fees need at least one
/// recognized month name.
///
/// # Errors
///
/// Returns the first rule the payment violates.
pub fn validate_new_payment(payment: &NewPayment<'_>) -> Result<PaymentMonths, PaymentError> {
    if payment.receipt_no.trim().is_empty() {
        return Err(PaymentError::MissingField("receipt_no"));
    }
    if payment.year <= 0 {
        return Err(PaymentError::InvalidYear(payment.year));
    }
    if payment.amount < Decimal::ZERO {
        return Err(PaymentError::NegativeAmount);
    }
    if let FeeType::Other(tag) = payment.fee_type {
        return Err(PaymentError::UnknownFeeType(tag.clone()));
    }

    match payment.subject {
        PaymentSubject::Student(id) => {
            if id.trim().is_empty() {
                return Err(PaymentError::MissingField("student_id"));
            }
            if !payment.fee_type.is_student_fee() {
                return Err(PaymentError::FeeTypeMismatch {
                    fee_type: payment.fee_type.to_string(),
                    subject: "student",
                });
            }
        }
        PaymentSubject::Class { .. } => {
            if !payment.fee_type.is_class_fee() {
                return Err(PaymentError::FeeTypeMismatch {
                    fee_type: payment.fee_type.to_string(),
                    subject: "class",
                });
            }
        }
    }

    if payment.fee_type.is_one_off() {
        return Ok(PaymentMonths::Single(NOT_APPLICABLE_MONTH.to_string()));
    }

    let months = payment
        .month
        .filter(|months| !months.is_empty())
        .ok_or_else(|| PaymentError::MonthRequired(payment.fee_type.to_string()))?;

    if let Some(bad) = months
        .names()
        .into_iter()
        .find(|name| Month::from_name(name).is_none())
    {
        return Err(PaymentError::InvalidMonth(bad.to_string()));
    }

    Ok(months.clone())
}

/// Splits a validated month value into the values to store, one per record.
///
/// A student's monthly fee covering several months becomes one record per
/// month. Class payments and one-off fees are stored as submitted.
#[must_use]
pub fn months_per_record(
    subject: &PaymentSubject,
    fee_type: &FeeType,
    months: PaymentMonths,
) -> Vec<PaymentMonths> {
    if subject.is_class() || fee_type.is_one_off() {
        return vec![months];
    }

    match months {
        PaymentMonths::Single(_) => vec![months],
        PaymentMonths::Multiple(names) => names.into_iter().map(PaymentMonths::Single).collect(),
    }
}
