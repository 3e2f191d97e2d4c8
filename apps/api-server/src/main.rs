//! # Blog Zone API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use blogzone_infra::DatabaseConnections;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Blog Zone API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await;
    let db = state.db.clone();
    let origins = config.cors_origins.clone();

    // Runs until SIGINT/SIGTERM; actix drains in-flight requests first.
    let result = HttpServer::new(move || {
        App::new()
            .wrap(cors_policy(&origins))
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    if let Some(db) = db {
        release_database(db).await;
    }

    tracing::info!("Server stopped");
    result
}

/// Cross-origin policy: the configured origins, with cookies.
fn cors_policy(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

#[cfg(feature = "postgres")]
async fn release_database(db: Arc<DatabaseConnections>) {
    // Worker clones of the state may still hold the handle; the pool closes regardless.
    if let Err(e) = db.close().await {
        tracing::error!("Failed to close database connection: {}", e);
    }
}

#[cfg(not(feature = "postgres"))]
async fn release_database(_db: Arc<DatabaseConnections>) {}
