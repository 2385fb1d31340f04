mod auth;
mod error;
mod routes;
mod state;
mod wire;

use anyhow::{Context, Result};
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use rentquote_core::config::{AppConfig, LoadOptions};
use rentquote_core::load_catalog;
use state::AppState;
use tower_http::cors::CorsLayer;

fn init_logging(config: &AppConfig) {
    use rentquote_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

/// Builds the full route tree. The tour operator surface sits behind the
/// API-key middleware; `/health` stays public.
pub fn app_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/quotations", post(routes::quotations::create_quotation))
        .route("/locations", get(routes::locations::list_locations))
        .route("/vehicles", get(routes::vehicles::list_vehicles))
        .route("/vehicles/{id}", get(routes::vehicles::get_vehicle))
        .route("/damages/{plate}", get(routes::damages::get_damages))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_api_key));

    Router::new()
        .route("/health", get(routes::health::health))
        .nest("/api/v1/touroperator", protected)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    // Load config and initialize logging before any other operations
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let catalog = load_catalog(&config.catalog.path).with_context(|| {
        format!("failed to load catalog from {}", config.catalog.path.display())
    })?;

    tracing::info!(
        event_name = "system.catalog.loaded",
        path = %config.catalog.path.display(),
        groups = catalog.len(),
        currency = catalog.currency(),
        "catalog snapshot loaded"
    );

    let state = AppState::new(catalog, config.auth.api_key.clone());
    let router = app_router(state);

    let bind = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;

    tracing::info!(event_name = "system.server.started", address = %bind, "rentquote-server listening");

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!(event_name = "system.server.stopping", "rentquote-server stopping");
    let _ = shutdown_tx.send(());

    let drain = std::time::Duration::from_secs(config.server.graceful_shutdown_secs);
    match tokio::time::timeout(drain, server).await {
        Ok(joined) => joined.context("server task panicked")??,
        Err(_) => {
            tracing::warn!(
                event_name = "system.server.drain_timeout",
                timeout_secs = config.server.graceful_shutdown_secs,
                "open connections did not drain in time"
            );
        }
    }

    Ok(())
}
