/// CarbonAtlas API server entry point

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use carbonatlas_api::app::{build_router, AppState};
use carbonatlas_api::config::Config;
use carbonatlas_geocoder::GeocodingClient;
use carbonatlas_shared::db::migrations::run_migrations;
use carbonatlas_shared::db::pool::{create_pool, DatabaseConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Honor a local .env file in development; ignore if absent
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("carbonatlas_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let pool = create_pool(DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await
    .context("Failed to connect to database")?;

    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let geocoder = GeocodingClient::new(config.geocoding.api_key.clone())
        .context("Failed to build geocoding client")?;

    let bind_addr = config.bind_addr();
    let state = AppState {
        db: pool,
        config: Arc::new(config),
        geocoder: Arc::new(geocoder),
    };

    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    tracing::info!(addr = %bind_addr, "CarbonAtlas API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received");
    }
}
