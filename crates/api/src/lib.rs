//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for students and payments
//! - Bearer-token authentication middleware
//! - Request extractors with JSON rejections
//! - Error responses

pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;

use axum::Router;
use campus_core::clock::Clock;
use campus_shared::JwtService;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Verifies bearer tokens issued by the login service.
    pub jwt_service: Arc<JwtService>,
    /// Source of "today" for due calculations.
    pub clock: Arc<dyn Clock>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
mod test_support;
