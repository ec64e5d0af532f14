//! Campus API Server
//!
//! Main entry point for the school fee administration backend.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campus_api::{AppState, create_router};
use campus_core::clock::SystemClock;
use campus_db::{connect, ensure_schema};
use campus_shared::{AppConfig, JwtConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campus=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = connect(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    info!("Connected to database");

    ensure_schema(&db).await?;

    let jwt_service = JwtService::new(JwtConfig {
        secret: config.auth.token_secret.clone(),
        ..JwtConfig::default()
    });

    let clock = SystemClock::from_timezone_name(&config.school.timezone)
        .map_err(anyhow::Error::msg)?;
    info!(timezone = %clock.timezone(), "School clock configured");

    let state = AppState {
        db: Arc::new(db),
        jwt_service: Arc::new(jwt_service),
        clock: Arc::new(clock),
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
