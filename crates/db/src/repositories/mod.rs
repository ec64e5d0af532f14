//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod payment;
pub mod student;

pub use payment::{CreatePaymentInput, PaymentFilter, PaymentRepository, to_record};
pub use student::{
    StudentFilter, StudentInput, StudentRepository, StudentRepositoryError, due_info,
};
