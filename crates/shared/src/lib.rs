//! Shared types, errors, and configuration for Campus.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management
//! - Bearer token claims issued by the external login service
//! - Pagination types for list endpoints

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use auth::Claims;
pub use config::{AppConfig, AuthConfig, DatabaseConfig, SchoolConfig, ServerConfig};
pub use error::AppError;
pub use jwt::{JwtConfig, JwtError, JwtService};
