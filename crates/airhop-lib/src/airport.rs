use serde::Serialize;

/// Code used by the flat files when an airport has no IATA/ICAO code.
pub const UNKNOWN_CODE: &str = "\\N";

/// Mean Earth radius used by [`Haversine`].
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// An airport as loaded from the dataset. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub id: String,
    pub iata: String,
    pub icao: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Airport {
    pub fn new(
        id: impl Into<String>,
        iata: impl Into<String>,
        icao: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            iata: iata.into(),
            icao: icao.into(),
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Coordinates of the airport.
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Code used as the node key in connection graphs: the IATA code, or the
    /// ICAO code (then the id) for airports without one.
    pub fn code(&self) -> &str {
        [&self.iata, &self.icao]
            .into_iter()
            .find(|code| !code.is_empty() && code.as_str() != UNKNOWN_CODE)
            .unwrap_or(&self.id)
    }

    /// Whether the airport lacks a usable primary code.
    pub fn has_unknown_code(&self) -> bool {
        self.iata.is_empty() || self.iata == UNKNOWN_CODE
    }

    /// Distance to another airport under the given metric.
    pub fn distance_to(&self, other: &Airport, metric: &dyn DistanceMetric) -> f64 {
        metric.distance(self.position(), other.position())
    }
}

/// Distance between two coordinates. Implementations must be non-negative
/// and symmetric; the search relies on it for optimality.
pub trait DistanceMetric: Send + Sync {
    fn distance(&self, from: GeoPoint, to: GeoPoint) -> f64;
}

/// Great-circle distance in kilometres.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    fn distance(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        let from_lat = from.latitude.to_radians();
        let to_lat = to.latitude.to_radians();
        let delta_lat = (to.latitude - from.latitude).to_radians();
        let delta_lon = (to.longitude - from.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}
