//! Output formatting for route and airport rendering.

use std::fmt::Write as _;
use std::io::{self, Write};

use airhop_lib::{Airport, Itinerary, LegKind, RoutePlan};
use clap::ValueEnum;
use serde::Serialize;

use crate::terminal::{format_distance_km, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// JSON view of a planned route.
#[derive(Debug, Serialize)]
pub struct RouteOutput<'a> {
    pub from: &'a Airport,
    pub to: &'a Airport,
    pub found: bool,
    pub path: &'a [String],
    pub total_distance: f64,
    pub flights: usize,
    pub ground_transfers: usize,
    pub as_string: String,
    pub stops: Vec<&'a Airport>,
}

impl<'a> From<&'a RoutePlan> for RouteOutput<'a> {
    fn from(plan: &'a RoutePlan) -> Self {
        Self {
            from: &plan.source,
            to: &plan.destination,
            found: plan.is_found(),
            path: &plan.route.path,
            total_distance: plan.total_distance(),
            flights: plan.itinerary.flight_count(),
            ground_transfers: plan.itinerary.ground_count(),
            as_string: plan.itinerary.to_string(),
            stops: plan.stops.iter().map(|airport| &**airport).collect(),
        }
    }
}

/// Render an itinerary with colored leg separators.
pub fn styled_itinerary(itinerary: &Itinerary, palette: &ColorPalette) -> String {
    let mut out = String::new();
    for stop in &itinerary.stops {
        match stop.arrived_by {
            Some(LegKind::Flight) => {
                let _ = write!(out, " {}->{} ", palette.flight, palette.reset);
            }
            Some(LegKind::Ground) => {
                let _ = write!(out, " {}=>{} ", palette.ground, palette.reset);
            }
            None => {}
        }
        let _ = write!(out, "{}{}{}", palette.code, stop.code, palette.reset);
    }
    out
}

/// Render a route plan as text.
pub fn render_route_text(plan: &RoutePlan, palette: &ColorPalette) -> String {
    let source = plan.source.code();
    let destination = plan.destination.code();

    if !plan.is_found() {
        return format!(
            "{}No route found{} between {} and {}.\n",
            palette.warning, palette.reset, source, destination
        );
    }

    let mut out = format!("Route from {} to {}:\n", source, destination);
    let _ = writeln!(out, "  {}", styled_itinerary(&plan.itinerary, palette));
    let _ = writeln!(out);
    for airport in &plan.stops {
        let _ = writeln!(
            out,
            "  {}{:<4}{} {}",
            palette.code,
            airport.code(),
            palette.reset,
            airport.name
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}Flights: {}, ground transfers: {}{}",
        palette.muted,
        plan.itinerary.flight_count(),
        plan.itinerary.ground_count(),
        palette.reset
    );
    let _ = writeln!(
        out,
        "Total distance: {}",
        format_distance_km(plan.total_distance())
    );
    out
}

/// Render a single airport as text.
pub fn render_airport_text(airport: &Airport, palette: &ColorPalette) -> String {
    format!(
        "{}{}{} {}\n  id: {}\n  iata: {}\n  icao: {}\n  position: {:.4}, {:.4}\n",
        palette.code,
        airport.code(),
        palette.reset,
        airport.name,
        airport.id,
        airport.iata,
        airport.icao,
        airport.latitude,
        airport.longitude
    )
}

/// Render any serializable value as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
