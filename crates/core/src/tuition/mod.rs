//! Tuition dues and per-student fee summaries.
//!
//! Every screen that shows what a student owes goes through
//! [`compute_due_months`]; there is no second copy of the rule.

pub mod due;
pub mod ledger;


pub use due::{DueResult, GRACE_DAY, compute_due_months};
pub use ledger::{FeeSummary, has_paid, last_paid_month, summarize_fees, total_paid};
