//! School structure: class roster and staff roles.

pub mod roles;
pub mod roster;

pub use roles::{Role, Staff};
pub use roster::{CLASS_SECTIONS, is_valid_class, is_valid_section, sections_for};
