//! Service configuration from environment variables.
//!
//! - `AIRHOP_DATA_DIR`: directory holding `airports.csv` and `routes.csv`
//!   (default: platform data directory)
//! - `SERVICE_PORT`: HTTP port (default: 8080)
//! - `GROUND_MAX_DISTANCE_KM`: radius for ground transfers (default: 100)

use std::env;
use std::path::PathBuf;

use airhop_lib::{default_data_dir, GroundOptions, Result, DEFAULT_GROUND_DISTANCE_KM};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable for the HTTP port.
pub const PORT_ENV: &str = "SERVICE_PORT";

/// Environment variable for the ground transfer radius.
pub const GROUND_DISTANCE_ENV: &str = "GROUND_MAX_DISTANCE_KM";

/// Runtime configuration of the service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub data_dir: PathBuf,
    pub port: u16,
    pub ground: GroundOptions,
}

impl ServiceConfig {
    /// Read the configuration from the environment.
    ///
    /// Unparsable port or distance values fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let data_dir = default_data_dir()?;
        let port = parse_port(env::var(PORT_ENV).ok().as_deref());
        let max_distance_km = parse_distance(env::var(GROUND_DISTANCE_ENV).ok().as_deref());

        Ok(Self {
            data_dir,
            port,
            ground: GroundOptions { max_distance_km },
        })
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    value
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

fn parse_distance(value: Option<&str>) -> f64 {
    value
        .and_then(|d| d.trim().parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d >= 0.0)
        .unwrap_or(DEFAULT_GROUND_DISTANCE_KM)
}
