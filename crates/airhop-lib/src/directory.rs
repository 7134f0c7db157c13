//! Airport lookup by any of the codes an airport is known under.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::airport::{Airport, UNKNOWN_CODE};
use crate::dataset::AirportSource;
use crate::error::Result;

/// Immutable snapshot of the airport set.
///
/// Airports are kept once each, in load order, and every code form (`id`,
/// `iata`, `icao`) maps back to the same entry.
#[derive(Debug, Default)]
pub struct AirportIndex {
    airports: Vec<Arc<Airport>>,
    by_code: HashMap<String, Arc<Airport>>,
}

impl AirportIndex {
    pub fn new(airports: impl IntoIterator<Item = Airport>) -> Self {
        let mut index = Self::default();
        for airport in airports {
            let airport = Arc::new(airport);
            for code in [&airport.id, &airport.iata, &airport.icao] {
                if code.is_empty() || code == UNKNOWN_CODE {
                    continue;
                }
                // First airport to claim a code keeps it.
                index
                    .by_code
                    .entry(code.clone())
                    .or_insert_with(|| Arc::clone(&airport));
            }
            index.airports.push(airport);
        }
        debug!(
            airports = index.airports.len(),
            codes = index.by_code.len(),
            "built airport index"
        );
        index
    }

    /// Resolve an airport by id, IATA or ICAO code.
    pub fn get(&self, code: &str) -> Option<&Arc<Airport>> {
        self.by_code.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Unique airports in load order.
    pub fn airports(&self) -> &[Arc<Airport>] {
        &self.airports
    }

    /// Whether `airport` is the one its graph key ([`Airport::code`])
    /// resolves to. An airport whose key was claimed first by another entry
    /// is shadowed and never becomes a graph node.
    pub fn owns_code(&self, airport: &Arc<Airport>) -> bool {
        self.by_code
            .get(airport.code())
            .is_some_and(|owner| Arc::ptr_eq(owner, airport))
    }

    /// Airports that own their graph key, in load order.
    pub fn graph_airports(&self) -> impl Iterator<Item = &Arc<Airport>> {
        self.airports.iter().filter(|airport| self.owns_code(airport))
    }

    /// Resolve `code` to the airport backing its graph node.
    ///
    /// Usually the same as [`get`](Self::get); differs when `code` names a
    /// shadowed airport, which is then replaced by the owner of its key.
    pub fn resolve_node(&self, code: &str) -> Option<&Arc<Airport>> {
        let airport = self.by_code.get(code)?;
        self.by_code.get(airport.code()).or(Some(airport))
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

/// Source of the airport index. Must be idempotent and cheap to call
/// repeatedly.
pub trait AirportDirectory: Send + Sync {
    fn resolve_all(&self) -> Result<Arc<AirportIndex>>;
}

impl AirportDirectory for Arc<AirportIndex> {
    fn resolve_all(&self) -> Result<Arc<AirportIndex>> {
        Ok(Arc::clone(self))
    }
}

/// Loads the airport set once and shares it with every caller afterwards.
pub struct CachedAirportDirectory<S> {
    source: S,
    index: OnceCell<Arc<AirportIndex>>,
}

impl<S: AirportSource> CachedAirportDirectory<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            index: OnceCell::new(),
        }
    }
}

impl<S: AirportSource> AirportDirectory for CachedAirportDirectory<S> {
    fn resolve_all(&self) -> Result<Arc<AirportIndex>> {
        let index = self.index.get_or_try_init(|| {
            let airports = self.source.load_airports()?;
            Ok::<_, crate::Error>(Arc::new(AirportIndex::new(airports)))
        })?;
        Ok(Arc::clone(index))
    }
}
