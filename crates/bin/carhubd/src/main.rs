//! # carhubd — carhub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (ctrl-c)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;

use carhub_adapter_http_axum::state::AppState;
use carhub_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteOrderRepository, SqliteReviewRepository,
    SqliteServiceRepository, SqliteUserRepository,
};
use carhub_app::services::catalog_service::CatalogService;
use carhub_app::services::order_service::OrderService;
use carhub_app::services::review_service::ReviewService;
use carhub_app::services::user_service::UserService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .context("failed to initialise the database")?;
    let pool = db.pool().clone();

    // Repositories
    let service_repo = SqliteServiceRepository::new(pool.clone());
    let review_repo = SqliteReviewRepository::new(pool.clone());
    let order_repo = SqliteOrderRepository::new(pool.clone());
    let user_repo = SqliteUserRepository::new(pool);

    // Services
    let catalog_service = CatalogService::new(service_repo);
    let review_service = ReviewService::new(review_repo);
    let order_service = OrderService::new(order_repo);
    let user_service = UserService::new(user_repo);

    // HTTP
    let state = AppState::new(catalog_service, review_service, order_service, user_service);
    let app = carhub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "carhubd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("carhubd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
