//! Shortest airport itinerary HTTP microservice.
//!
//! # Configuration
//!
//! - `AIRHOP_DATA_DIR` - directory holding airports.csv and routes.csv
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `GROUND_MAX_DISTANCE_KM` - ground transfer radius (default: 100)
//! - `RUST_LOG` - log level (default: info)
//! - `LOG_FORMAT` - log format: json (default) or text

use std::net::SocketAddr;

use tracing::{error, info};

use airhop_service::{build_router, init_logging, AppState, LoggingConfig, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("airhop-service");
    init_logging(&logging_config);

    let config = ServiceConfig::from_env()?;
    info!(
        service = logging_config.service.as_deref().unwrap_or_default(),
        data_dir = %config.data_dir.display(),
        port = config.port,
        ground_max_distance_km = config.ground.max_distance_km,
        "starting route service"
    );

    let state = AppState::load(&config.data_dir, config.ground).map_err(|e| {
        error!(error = %e, path = %config.data_dir.display(), "failed to load application state");
        e
    })?;
    info!(state = ?state, "application state loaded");

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
