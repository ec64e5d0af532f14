//! Per-student payment summaries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::due::{DueResult, compute_due_months};
use crate::calendar::Month;
use crate::payment::{FeeType, PaymentRecord};
use crate::student::StudentDueInfo;

fn payments_of<'a>(
    student_id: &'a str,
    fee_type: &'a FeeType,
    payments: &'a [PaymentRecord],
) -> impl Iterator<Item = &'a PaymentRecord> + 'a {
    payments
        .iter()
        .filter(move |p| p.student_id == student_id && &p.fee_type == fee_type)
}

/// Latest month paid for `fee_type`, ordered by year then month.
///
/// Only the first month of each record is considered, and records whose
/// month is missing or unrecognized are skipped.
#[must_use]
pub fn last_paid_month(
    student_id: &str,
    fee_type: &FeeType,
    payments: &[PaymentRecord],
) -> Option<Month> {
    payments_of(student_id, fee_type, payments)
        .filter_map(|p| {
            let month = Month::from_name(p.month.as_ref()?.first()?)?;
            Some((p.year, month))
        })
        .max()
        .map(|(_, month)| month)
}

/// Sum of every `fee_type` payment made for the student, across all years.
#[must_use]
pub fn total_paid(student_id: &str, fee_type: &FeeType, payments: &[PaymentRecord]) -> Decimal {
    payments_of(student_id, fee_type, payments)
        .map(|p| p.amount)
        .sum()
}

/// Whether the student has any payment of `fee_type`.
#[must_use]
pub fn has_paid(student_id: &str, fee_type: &FeeType, payments: &[PaymentRecord]) -> bool {
    payments_of(student_id, fee_type, payments)
        .next()
        .is_some()
}

/// Tuition and vehicle fee overview shown on a student's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeSummary {
    /// Latest tuition month paid.
    pub tuition_last_paid: Option<Month>,
    /// Total tuition paid.
    pub tuition_total: Decimal,
    /// Latest vehicle fee month paid.
    pub vehicle_last_paid: Option<Month>,
    /// Total vehicle fee paid.
    pub vehicle_total: Decimal,
    /// Outstanding tuition.
    pub dues: DueResult,
}

/// Builds the [`FeeSummary`] for one student.
#[must_use]
pub fn summarize_fees(
    student: &StudentDueInfo,
    payments: &[PaymentRecord],
    today: NaiveDate,
) -> FeeSummary {
    let id = student.id.as_str();
    FeeSummary {
        tuition_last_paid: last_paid_month(id, &FeeType::Tuition, payments),
        tuition_total: total_paid(id, &FeeType::Tuition, payments),
        vehicle_last_paid: last_paid_month(id, &FeeType::Vehicle, payments),
        vehicle_total: total_paid(id, &FeeType::Vehicle, payments),
        dues: compute_due_months(student, payments, today),
    }
}
