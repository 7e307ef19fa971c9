//! Full report command handler.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use flightcalc_cli::GlobalOptions;
use flightcalc_lib::FlightReport;

/// Handle the report subcommand.
///
/// Computes velocity, distance, and remaining fuel and prints all three.
pub fn handle_report(options: &GlobalOptions) -> Result<()> {
    let params = options.load_parameters()?;
    let report = FlightReport::compute(&params).context("failed to compute flight report")?;
    info!(
        new_velocity_kmh = report.new_velocity_kmh.value(),
        new_distance_km = report.new_distance_km.value(),
        remaining_fuel_kg = report.remaining_fuel_kg.value(),
        "flight report computed"
    );

    let rendered = report.render(options.format.into())?;
    io::stdout()
        .write_all(rendered.as_bytes())
        .context("failed to write report to stdout")?;
    Ok(())
}
