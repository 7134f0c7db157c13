//! Airport lookup command.

use std::path::Path;

use anyhow::{bail, Result};

use crate::commands::load_dataset;
use airhop_cli::output::{render_airport_text, render_json, OutputFormat};
use airhop_cli::terminal::ColorPalette;

/// Handle the airports subcommand: look up one airport by any of its codes.
pub fn handle_airports_command(
    target: Option<&Path>,
    format: OutputFormat,
    code: &str,
) -> Result<()> {
    let dataset = load_dataset(target, false)?;
    let Some(airport) = dataset.airports.get(code.trim()) else {
        bail!("Unknown airport '{}'.", code.trim());
    };

    match format {
        OutputFormat::Json => render_json(&**airport)?,
        OutputFormat::Text => print!(
            "{}",
            render_airport_text(airport, &ColorPalette::detect())
        ),
    }
    Ok(())
}
