//! Student enrollment rules.

pub mod error;
pub mod types;
pub mod validation;

pub use error::StudentError;
pub use types::{StudentDueInfo, StudentStatus};
pub use validation::{StudentFields, normalize_student_id, validate_student};
