//! Tuition due-month calculation.
//!
//! The rule, per student and per calendar year:
//!
//! - tuition is owed from the admission month up to the current month;
//! - the current month only counts from the [`GRACE_DAY`] onwards;
//! - a month is settled when it is at or before the latest month with a
//!   tuition payment this year (only the first month of a multi-month
//!   record is looked at);
//! - in the first days of January, an unpaid December of last year takes
//!   precedence over everything else.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::calendar::{Month, month_index_of};
use crate::payment::{FeeType, PaymentRecord};
use crate::student::{StudentDueInfo, StudentStatus};

/// Day of the month from which the current month's tuition is expected.
pub const GRACE_DAY: u32 = 10;

/// Outcome of a due-month calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DueResult {
    /// Student has left; nothing is computed.
    Transferred,
    /// Student has no admission month on record.
    NoAdmissionMonth,
    /// Admission month is not a month name.
    InvalidAdmissionMonth,
    /// Nothing is outstanding.
    UpToDate,
    /// Unpaid months of the current year, in calendar order.
    Due(Vec<Month>),
    /// Last year's December is unpaid (reported only before the grace day in January).
    DecemberCarryover,
}

impl DueResult {
    /// Short machine-readable tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transferred => "transferred",
            Self::NoAdmissionMonth => "no_admission_month",
            Self::InvalidAdmissionMonth => "invalid_admission_month",
            Self::UpToDate => "up_to_date",
            Self::Due(_) => "due",
            Self::DecemberCarryover => "december_carryover",
        }
    }

    /// Whether money is owed.
    #[must_use]
    pub const fn is_outstanding(&self) -> bool {
        matches!(self, Self::Due(_) | Self::DecemberCarryover)
    }

    /// Months owed in the current year; empty unless `Due`.
    #[must_use]
    pub fn months(&self) -> &[Month] {
        match self {
            Self::Due(months) => months,
            _ => &[],
        }
    }
}

impl fmt::Display for DueResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transferred => f.write_str("N/A (Transferred)"),
            Self::NoAdmissionMonth => f.write_str("N/A (No admission month)"),
            Self::InvalidAdmissionMonth => f.write_str("N/A (Invalid admission month)"),
            Self::UpToDate => f.write_str("Up-to-date"),
            Self::DecemberCarryover => f.write_str("December (Last Year Due)"),
            Self::Due(months) => {
                let names: Vec<&str> = months.iter().map(|m| m.name()).collect();
                write!(f, "{} (Due)", names.join(", "))
            }
        }
    }
}

impl Serialize for DueResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DueResult", 3)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("months", self.months())?;
        state.serialize_field("label", &self.to_string())?;
        state.end()
    }
}

/// Computes which tuition months `student` currently owes.
///
/// `payments` may hold every payment in the system; records for other
/// students, other fee types or other years are ignored, as are records
/// whose month is missing or not a month name.
#[must_use]
pub fn compute_due_months(
    student: &StudentDueInfo,
    payments: &[PaymentRecord],
    today: NaiveDate,
) -> DueResult {
    if student.status == StudentStatus::Transferred {
        return DueResult::Transferred;
    }
    let admission_month = match student.admission_month.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return DueResult::NoAdmissionMonth,
    };

    let current_year = today.year();
    let tuition_for_year = |year: i32| {
        payments.iter().filter(move |p| {
            p.student_id == student.id && p.fee_type == FeeType::Tuition && p.year == year
        })
    };

    // Multi-month records only count their first month.
    let last_paid_index = tuition_for_year(current_year)
        .filter_map(|p| p.month.as_ref()?.first())
        .map(month_index_of)
        .max()
        .unwrap_or(-1);

    let current_month_index = month_index_of(Month::of(today).name());
    let mut expected_paid_up_to = if today.day() < GRACE_DAY {
        current_month_index - 1
    } else {
        current_month_index
    };

    if expected_paid_up_to < 0 {
        expected_paid_up_to = month_index_of(Month::December.name());
        let december_paid = tuition_for_year(current_year - 1).any(|p| {
            p.month
                .as_ref()
                .is_some_and(|months| months.contains(Month::December.name()))
        });
        // An unknown name gives -1 here, which also passes.
        if !december_paid && month_index_of(admission_month) <= 11 {
            return DueResult::DecemberCarryover;
        }
    }

    let Some(admission) = Month::from_name(admission_month) else {
        return DueResult::InvalidAdmissionMonth;
    };

    let admission_index = month_index_of(admission.name());
    let due: Vec<Month> = Month::ALL
        .iter()
        .copied()
        .filter(|m| {
            let i = month_index_of(m.name());
            i >= admission_index && i <= expected_paid_up_to && i > last_paid_index
        })
        .collect();

    if due.is_empty() {
        DueResult::UpToDate
    } else {
        DueResult::Due(due)
    }
}
