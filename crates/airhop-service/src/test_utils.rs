//! Fixtures for handler testing.

use std::path::PathBuf;
use std::sync::OnceLock;

use airhop_lib::GroundOptions;

use crate::state::AppState;

/// Path to the test fixture dataset.
pub const TEST_FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../docs/fixtures");

static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Shared AppState loaded from the fixture dataset, cached after first use.
///
/// # Panics
///
/// Panics if the fixture dataset cannot be loaded.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| {
            let path = PathBuf::from(TEST_FIXTURE_DIR);
            AppState::load(&path, GroundOptions::default())
                .unwrap_or_else(|e| panic!("failed to load test fixture from {:?}: {}", path, e))
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_loads_successfully() {
        let state = test_state();
        let airports = state.airports().expect("airports resolve");
        assert_eq!(airports.len(), 10);
        assert!(airports.contains("TLL"));
        assert_eq!(state.routes().len(), 17);
    }
}
