//! Routecast HTTP Server
//!
//! Main entry point for the dashboard API server.

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context;
use application::RouteForecastService;
use axum::extract::DefaultBodyLimit;
use infrastructure::{
    AppConfig, StaticLocationResolver, WeatherAdapter, config::config_path, init_logging,
};
use presentation_http::{RequestIdLayer, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Environment variable naming the config file
const CONFIG_PATH_ENV: &str = "ROUTECAST_CONFIG_PATH";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = config_path(std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));
    let config = AppConfig::load_from(&path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

    init_logging(
        config.server.log_format,
        "presentation_http=debug,routecast_server=debug,application=info,infrastructure=info,tower_http=info",
    )?;

    info!("Routecast v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = config.server.port,
        places = config.city_coordinates.len(),
        locale = %config.locale,
        "Configuration loaded"
    );

    let locations = StaticLocationResolver::new(config.city_coordinates.clone());
    let weather = WeatherAdapter::with_config(config.weather.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize weather provider: {e}"))?;

    let service = RouteForecastService::new(
        Arc::new(locations),
        Arc::new(weather),
        config.classifier(),
    );
    let state = AppState::new(service);

    let app = routes::create_router(state)
        .layer(DefaultBodyLimit::max(config.server.max_body_size_json_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new());

    let app = if config.server.cors_enabled {
        app.layer(cors_layer(&config.server.allowed_origins))
    } else {
        app
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Allow every origin when none is configured
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    use axum::http::{HeaderValue, Method};

    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
}
