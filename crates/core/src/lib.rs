//! Core business logic for Campus.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and fee calculations live here.
//!
//! # Modules
//!
//! - `calendar` - Month names and indices
//! - `clock` - Injectable "today"
//! - `school` - Class roster, staff roles and permissions
//! - `student` - Student validation and status
//! - `payment` - Fee types, payment subjects and validation
//! - `tuition` - Due-month calculator and fee summaries

pub mod calendar;
pub mod clock;
pub mod payment;
pub mod school;
pub mod student;
pub mod tuition;
