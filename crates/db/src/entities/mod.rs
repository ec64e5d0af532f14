//! `SeaORM` entity definitions.

pub mod payments;
pub mod students;

pub mod prelude {
    //! Entity re-exports.

    pub use super::payments::Entity as Payments;
    pub use super::students::Entity as Students;
}
