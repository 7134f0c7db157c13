//! Route command handler for computing itineraries between airports.

use std::path::Path;

use anyhow::Result;

use airhop_lib::{plan_route, Error as RouteError, GroundOptions, RouteRequest};

use crate::commands::load_dataset;
use airhop_cli::output::{render_json, render_route_text, OutputFormat, RouteOutput};
use airhop_cli::terminal::ColorPalette;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Source airport code (IATA, ICAO or id).
    pub from: String,
    /// Destination airport code (IATA, ICAO or id).
    pub to: String,
    /// Hop budget; zero means unlimited.
    pub hops: Option<usize>,
    /// Allow ground transfers between nearby airports.
    pub ground: bool,
    /// Maximum ground transfer distance in kilometres.
    pub max_ground_km: f64,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        let mut request = RouteRequest::new(self.from.trim(), self.to.trim());
        request.hops = self.hops;
        if self.ground {
            request = request.with_ground(GroundOptions {
                max_distance_km: self.max_ground_km,
            });
        }
        request
    }
}

/// Handle the route subcommand.
///
/// An unreachable destination is not a failure: the command prints
/// "No route found" and exits successfully.
pub fn handle_route_command(
    target: Option<&Path>,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    if args.max_ground_km < 0.0 || !args.max_ground_km.is_finite() {
        anyhow::bail!(
            "--max-ground-km must be a non-negative number, got {}",
            args.max_ground_km
        );
    }

    let dataset = load_dataset(target, true)?;
    let plan = match plan_route(&dataset.airports, &dataset.routes, &args.to_request()) {
        Ok(plan) => plan,
        Err(RouteError::UnknownAirport { code }) => {
            anyhow::bail!("Unknown airport '{}'. Use an IATA, ICAO or numeric airport id.", code)
        }
        Err(other) => return Err(other.into()),
    };

    match format {
        OutputFormat::Json => render_json(&RouteOutput::from(&plan))?,
        OutputFormat::Text => print!("{}", render_route_text(&plan, &ColorPalette::detect())),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> RouteCommandArgs {
        RouteCommandArgs {
            from: " TLL ".to_string(),
            to: "KUN".to_string(),
            hops: Some(3),
            ground: false,
            max_ground_km: 100.0,
        }
    }

    #[test]
    fn request_without_ground() {
        let request = args().to_request();
        assert_eq!(request.from, "TLL");
        assert_eq!(request.hops, Some(3));
        assert!(request.ground.is_none());
    }

    #[test]
    fn request_with_ground() {
        let request = RouteCommandArgs {
            ground: true,
            max_ground_km: 150.0,
            ..args()
        }
        .to_request();
        assert_eq!(
            request.ground,
            Some(GroundOptions {
                max_distance_km: 150.0
            })
        );
    }
}
