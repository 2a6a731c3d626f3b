//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are the
//! per-context enums rendered through `kernel::error::AppError`.

mod app;
mod doc;
mod settings;

use anyhow::Context;
use auth::{InMemoryUserRepository, PgUserRepository};
use problem::{InMemoryProblemRepository, PgProblemRepository};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,problem=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;

    let auth_config = Arc::new(settings.auth_config());
    tracing::info!(
        time_zone = %auth_config.time_zone,
        cookie_secure = auth_config.cookie_secure,
        "Auth configured"
    );

    let app = match &settings.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(settings.database_max_connections)
                .acquire_timeout(settings.database_acquire_timeout)
                .connect(database_url)
                .await
                .context("failed to connect to DATABASE_URL")?;

            tracing::info!("Connected to database");

            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await
                .context("failed to run migrations")?;

            tracing::info!("Migrations completed");

            app::build_router(
                PgUserRepository::new(pool.clone()),
                PgProblemRepository::new(pool),
                auth_config,
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory storage, data is lost on exit");

            app::build_router(
                InMemoryUserRepository::new(),
                InMemoryProblemRepository::new(),
                auth_config,
            )
        }
    }
    .layer(TraceLayer::new_for_http())
    .layer(app::cors_layer(&settings.frontend_origins));

    // Start server
    tracing::info!("Listening on {}", settings.bind_addr);

    let listener = TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
