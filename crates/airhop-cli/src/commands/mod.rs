// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments and dispatches.

pub mod airports;
pub mod route;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use airhop_lib::{
    default_data_dir, AirportDirectory, AirportIndex, CachedAirportDirectory, CsvDataset,
    RouteRecord, RouteSource,
};

/// Airports and direct routes loaded from the dataset directory.
pub struct LoadedDataset {
    pub airports: Arc<AirportIndex>,
    pub routes: Arc<[RouteRecord]>,
}

/// Resolve the dataset directory: `--data-dir` first, then the library
/// default (`AIRHOP_DATA_DIR` or the platform data directory).
pub fn resolve_data_dir(target: Option<&Path>) -> Result<PathBuf> {
    match target {
        Some(path) => Ok(path.to_path_buf()),
        None => default_data_dir().context("failed to resolve the dataset directory"),
    }
}

/// Open the dataset and load airports, plus routes when `with_routes` is set.
pub fn load_dataset(target: Option<&Path>, with_routes: bool) -> Result<LoadedDataset> {
    let dir = resolve_data_dir(target)?;
    let dataset = CsvDataset::open(&dir)
        .with_context(|| format!("failed to locate the dataset in {}", dir.display()))?;

    let routes = if with_routes {
        dataset
            .fetch_routes()
            .with_context(|| format!("failed to load routes from {}", dir.display()))?
    } else {
        Vec::new()
    };
    let airports = CachedAirportDirectory::new(dataset)
        .resolve_all()
        .with_context(|| format!("failed to load airports from {}", dir.display()))?;

    Ok(LoadedDataset {
        airports,
        routes: routes.into(),
    })
}
