mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use airhop_cli::output::OutputFormat;
use airhop_lib::DEFAULT_GROUND_DISTANCE_KM;

use crate::commands::airports::handle_airports_command;
use crate::commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Shortest airport itineraries over direct flights")]
struct Cli {
    /// Directory holding airports.csv and routes.csv. Defaults to
    /// AIRHOP_DATA_DIR, then the platform data directory.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest itinerary between two airports.
    Route {
        /// Source airport code (IATA, ICAO or numeric id).
        #[arg(long = "from")]
        from: String,
        /// Destination airport code (IATA, ICAO or numeric id).
        #[arg(long = "to")]
        to: String,
        /// Hop budget. Zero or absent means unlimited.
        #[arg(long)]
        hops: Option<usize>,
        /// Allow ground transfers between nearby airports.
        #[arg(long)]
        ground: bool,
        /// Maximum ground transfer distance in kilometres.
        #[arg(long = "max-ground-km", default_value_t = DEFAULT_GROUND_DISTANCE_KM)]
        max_ground_km: f64,
    },
    /// Show an airport by IATA, ICAO or numeric id.
    Airports {
        #[arg(long)]
        code: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Command::Route {
            from,
            to,
            hops,
            ground,
            max_ground_km,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                hops,
                ground,
                max_ground_km,
            };
            handle_route_command(data_dir, cli.format, &args)
        }
        Command::Airports { code } => handle_airports_command(data_dir, cli.format, &code),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
