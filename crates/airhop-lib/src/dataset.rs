use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use directories::ProjectDirs;
use serde::Serialize;
use tracing::{debug, info};

use crate::airport::Airport;
use crate::error::{Error, Result};

/// Environment variable overriding the dataset directory.
pub const DATA_DIR_ENV: &str = "AIRHOP_DATA_DIR";

const AIRPORTS_FILENAME: &str = "airports.csv";
const ROUTES_FILENAME: &str = "routes.csv";

/// A direct flight offering as listed in `routes.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRecord {
    pub source_code: String,
    pub source_id: String,
    pub destination_code: String,
    pub destination_id: String,
    /// Number of stops. Not used for weighting.
    pub stops: u32,
}

impl RouteRecord {
    pub fn new(source_code: impl Into<String>, destination_code: impl Into<String>) -> Self {
        Self {
            source_code: source_code.into(),
            source_id: String::new(),
            destination_code: destination_code.into(),
            destination_id: String::new(),
            stops: 0,
        }
    }
}

/// Anything able to produce the full airport list.
pub trait AirportSource: Send + Sync {
    fn load_airports(&self) -> Result<Vec<Airport>>;
}

/// Anything able to produce the full list of direct routes.
pub trait RouteSource: Send + Sync {
    fn fetch_routes(&self) -> Result<Vec<RouteRecord>>;
}

/// Locations of the two flat files making up a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub airports: PathBuf,
    pub routes: PathBuf,
}

impl DatasetPaths {
    /// Standard file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            airports: dir.join(AIRPORTS_FILENAME),
            routes: dir.join(ROUTES_FILENAME),
        }
    }

    /// Fail with [`Error::DatasetNotFound`] unless both files exist.
    pub fn ensure_exists(&self) -> Result<()> {
        for path in [&self.airports, &self.routes] {
            if !path.is_file() {
                return Err(Error::DatasetNotFound { path: path.clone() });
            }
        }
        Ok(())
    }
}

/// Resolve the dataset directory: `AIRHOP_DATA_DIR` when set, otherwise the
/// platform data directory.
pub fn default_data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let dirs = ProjectDirs::from("com", "airhop", "airhop").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Dataset backed by `airports.csv` and `routes.csv`.
#[derive(Debug, Clone)]
pub struct CsvDataset {
    paths: DatasetPaths,
}

impl CsvDataset {
    pub fn new(paths: DatasetPaths) -> Self {
        Self { paths }
    }

    /// Open the dataset in `dir`, checking the files are present.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let paths = DatasetPaths::in_dir(dir);
        paths.ensure_exists()?;
        Ok(Self::new(paths))
    }

    pub fn paths(&self) -> &DatasetPaths {
        &self.paths
    }
}

impl AirportSource for CsvDataset {
    fn load_airports(&self) -> Result<Vec<Airport>> {
        info!(path = %self.paths.airports.display(), "loading airports");
        let file = fs::File::open(&self.paths.airports)?;
        let airports = read_airports(file)?;
        info!(count = airports.len(), "airports loaded");
        Ok(airports)
    }
}

impl RouteSource for CsvDataset {
    fn fetch_routes(&self) -> Result<Vec<RouteRecord>> {
        info!(path = %self.paths.routes.display(), "loading routes");
        let file = fs::File::open(&self.paths.routes)?;
        let routes = read_routes(file)?;
        info!(count = routes.len(), "routes loaded");
        Ok(routes)
    }
}

/// Parse airports from CSV with an OpenFlights-style header row.
pub fn read_airports<R: Read>(reader: R) -> Result<Vec<Airport>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let columns = ColumnIndex::resolve(
        AIRPORTS_FILENAME,
        &headers,
        &["Airport ID", "IATA", "ICAO", "Name", "Latitude", "Longitude"],
    )?;

    let mut airports = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let field = |idx: usize| record.get(columns.0[idx]).unwrap_or_default();

        let latitude = parse_coordinate(field(4), "latitude", line)?;
        let longitude = parse_coordinate(field(5), "longitude", line)?;

        airports.push(Airport::new(
            field(0),
            field(1),
            field(2),
            field(3),
            latitude,
            longitude,
        ));
    }

    debug!(count = airports.len(), "parsed airport records");
    Ok(airports)
}

/// Parse routes from CSV with an OpenFlights-style header row.
pub fn read_routes<R: Read>(reader: R) -> Result<Vec<RouteRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let columns = ColumnIndex::resolve(
        ROUTES_FILENAME,
        &headers,
        &[
            "Source airport",
            "Source airport ID",
            "Destination airport",
            "Destination airport ID",
            "Stops",
        ],
    )?;

    let mut routes = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let field = |idx: usize| record.get(columns.0[idx]).unwrap_or_default();

        routes.push(RouteRecord {
            source_code: field(0).to_string(),
            source_id: field(1).to_string(),
            destination_code: field(2).to_string(),
            destination_id: field(3).to_string(),
            // The stop count is informational only; tolerate blanks.
            stops: field(4).parse().unwrap_or(0),
        });
    }

    debug!(count = routes.len(), "parsed route records");
    Ok(routes)
}

/// Positions of the required columns, in the order they were requested.
struct ColumnIndex(Vec<usize>);

impl ColumnIndex {
    fn resolve(file: &str, headers: &StringRecord, required: &[&str]) -> Result<Self> {
        let normalize = |s: &str| s.trim().to_ascii_lowercase();

        let mut positions = Vec::with_capacity(required.len());
        for column in required {
            let wanted = normalize(column);
            let position = headers
                .iter()
                .position(|header| normalize(header) == wanted)
                .ok_or_else(|| Error::MissingColumn {
                    file: file.to_string(),
                    column: column.to_string(),
                })?;
            positions.push(position);
        }
        Ok(Self(positions))
    }
}

fn parse_coordinate(value: &str, name: &str, line: u64) -> Result<f64> {
    value.parse::<f64>().map_err(|_| Error::InvalidRecord {
        file: AIRPORTS_FILENAME.to_string(),
        line,
        message: format!("{name} '{value}' is not a number"),
    })
}
