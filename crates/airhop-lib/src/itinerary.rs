use std::fmt;

use serde::Serialize;

use crate::graph::{airport_code_of, is_ground_code};

const FLIGHT_SEPARATOR: &str = " -> ";
const GROUND_SEPARATOR: &str = " => ";

/// How a stop was reached from the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegKind {
    Flight,
    Ground,
}

/// An airport on the itinerary and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stop {
    pub code: String,
    /// `None` for the origin.
    pub arrived_by: Option<LegKind>,
}

/// A route with ground nodes folded back onto their airports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    pub stops: Vec<Stop>,
}

impl Itinerary {
    /// Collapse a search path into airport stops. Moving between an airport
    /// and its own ground node is not a leg; moving between two ground nodes
    /// is a ground transfer; anything else is a flight.
    pub fn from_path(path: &[String]) -> Self {
        let mut stops: Vec<Stop> = Vec::with_capacity(path.len());

        for code in path {
            let airport = airport_code_of(code);
            match stops.last() {
                None => stops.push(Stop {
                    code: airport.to_string(),
                    arrived_by: None,
                }),
                Some(last) if last.code == airport => {}
                Some(_) => {
                    let kind = if is_ground_code(code) {
                        LegKind::Ground
                    } else {
                        LegKind::Flight
                    };
                    stops.push(Stop {
                        code: airport.to_string(),
                        arrived_by: Some(kind),
                    });
                }
            }
        }

        Self { stops }
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of flight legs.
    pub fn flight_count(&self) -> usize {
        self.count(LegKind::Flight)
    }

    /// Number of ground transfers.
    pub fn ground_count(&self) -> usize {
        self.count(LegKind::Ground)
    }

    fn count(&self, kind: LegKind) -> usize {
        self.stops
            .iter()
            .filter(|stop| stop.arrived_by == Some(kind))
            .count()
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stop in &self.stops {
            match stop.arrived_by {
                Some(LegKind::Flight) => f.write_str(FLIGHT_SEPARATOR)?,
                Some(LegKind::Ground) => f.write_str(GROUND_SEPARATOR)?,
                None => {}
            }
            f.write_str(&stop.code)?;
        }
        Ok(())
    }
}
