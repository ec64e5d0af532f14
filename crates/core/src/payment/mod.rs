//! Fee payments: fee types, payment subjects, and recording rules.

pub mod error;
pub mod types;
pub mod validation;

pub use error::PaymentError;
pub use types::{
    CLASS_FEE_TYPES, CLASS_SUBJECT_PREFIX, FeeType, NOT_APPLICABLE_MONTH, PaymentMonths,
    PaymentRecord, PaymentSubject, STUDENT_FEE_TYPES,
};
pub use validation::{NewPayment, months_per_record, validate_new_payment};
