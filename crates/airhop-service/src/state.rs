//! Application state for the HTTP service.
//!
//! The dataset is loaded once at startup and shared read-only by every
//! handler through axum's `State` extractor.

use std::path::Path;
use std::sync::Arc;

use airhop_lib::{
    Airport, AirportDirectory, AirportIndex, CachedAirportDirectory, CsvDataset,
    Error as LibError, GroundOptions, Result as LibResult, RouteRecord, RouteSource,
};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// Dataset files not found.
    DatasetNotFound(String),

    /// Failed to load the dataset.
    DatasetLoad(LibError),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatasetNotFound(path) => write!(f, "dataset not found: {}", path),
            Self::DatasetLoad(e) => write!(f, "failed to load dataset: {}", e),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DatasetLoad(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        match err {
            LibError::DatasetNotFound { path } => {
                Self::DatasetNotFound(path.display().to_string())
            }
            other => Self::DatasetLoad(other),
        }
    }
}

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable (`Arc` inside).
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    directory: Arc<dyn AirportDirectory>,
    routes: Arc<[RouteRecord]>,
    ground: GroundOptions,
}

impl AppState {
    /// Load application state from a dataset directory.
    pub fn load(data_dir: impl AsRef<Path>, ground: GroundOptions) -> Result<Self, AppStateError> {
        let data_dir = data_dir.as_ref();
        let dataset = CsvDataset::open(data_dir)?;

        tracing::info!(path = %data_dir.display(), "loading dataset");
        let routes = dataset.fetch_routes()?;
        let directory = CachedAirportDirectory::new(dataset);
        // Fail at startup rather than on the first request.
        let airports = directory.resolve_all()?;
        tracing::info!(
            airport_count = airports.len(),
            route_count = routes.len(),
            "dataset loaded successfully"
        );

        Ok(Self::with_directory(Arc::new(directory), routes, ground))
    }

    /// Create application state backed by an airport directory.
    pub fn with_directory(
        directory: Arc<dyn AirportDirectory>,
        routes: Vec<RouteRecord>,
        ground: GroundOptions,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                directory,
                routes: routes.into(),
                ground,
            }),
        }
    }

    /// Create application state from pre-loaded components.
    pub fn from_components(
        airports: Vec<Airport>,
        routes: Vec<RouteRecord>,
        ground: GroundOptions,
    ) -> Self {
        let index = Arc::new(AirportIndex::new(airports));
        Self::with_directory(Arc::new(index), routes, ground)
    }

    /// Current airport index, resolved through the directory.
    pub fn airports(&self) -> LibResult<Arc<AirportIndex>> {
        self.inner.directory.resolve_all()
    }

    /// Loaded direct routes.
    pub fn routes(&self) -> &Arc<[RouteRecord]> {
        &self.inner.routes
    }

    /// Ground transfer settings applied when a request enables them.
    pub fn ground(&self) -> GroundOptions {
        self.inner.ground
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let airport_count = self.airports().map(|index| index.len()).ok();
        f.debug_struct("AppState")
            .field("airport_count", &airport_count)
            .field("route_count", &self.inner.routes.len())
            .field("ground", &self.inner.ground)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_components() {
        let state = AppState::from_components(
            vec![Airport::new("1", "TLL", "EETN", "Tallinn", 59.41, 24.83)],
            vec![RouteRecord::new("TLL", "HEL")],
            GroundOptions::default(),
        );
        assert_eq!(state.airports().expect("airports resolve").len(), 1);
        assert_eq!(state.routes().len(), 1);
        assert_eq!(state.ground(), GroundOptions::default());
    }

    #[test]
    fn test_load_shares_cached_airports() {
        let state = crate::test_utils::test_state();
        let first = state.airports().expect("airports resolve");
        let second = state.clone().airports().expect("airports resolve");
        assert!(Arc::ptr_eq(&first, &second));
        assert!(first.contains("EVRA"));
    }

    #[test]
    fn test_load_missing_dataset() {
        let err = AppState::load("/nonexistent/airhop", GroundOptions::default())
            .expect_err("dataset is missing");
        assert!(matches!(err, AppStateError::DatasetNotFound(_)));
        assert!(err.to_string().contains("dataset not found"));
    }
}
