//! Single-quantity command handlers.
//!
//! Each handler runs only its own calculator, so a depleted fuel load does not
//! prevent printing the new velocity or distance.

use std::io::{self, Write};

use anyhow::{Context, Result};

use flightcalc_cli::output::Quantity;
use flightcalc_cli::GlobalOptions;
use flightcalc_lib::{compute_new_distance, compute_new_velocity, compute_remaining_fuel};

pub fn handle_velocity(options: &GlobalOptions) -> Result<()> {
    let params = options.load_parameters()?;
    let velocity =
        compute_new_velocity(params.acceleration(), params.velocity(), params.duration())
            .context("failed to compute new velocity")?;
    print_quantity(Quantity::Velocity(velocity), options)
}

pub fn handle_distance(options: &GlobalOptions) -> Result<()> {
    let params = options.load_parameters()?;
    let distance = compute_new_distance(params.distance(), params.velocity(), params.duration())
        .context("failed to compute new distance")?;
    print_quantity(Quantity::Distance(distance), options)
}

pub fn handle_fuel(options: &GlobalOptions) -> Result<()> {
    let params = options.load_parameters()?;
    let remaining = compute_remaining_fuel(params.fuel(), params.burn_rate(), params.duration())
        .context("failed to compute remaining fuel")?;
    print_quantity(Quantity::RemainingFuel(remaining), options)
}

fn print_quantity(quantity: Quantity, options: &GlobalOptions) -> Result<()> {
    let rendered = quantity.render(options.format)?;
    io::stdout()
        .write_all(rendered.as_bytes())
        .context("failed to write result to stdout")?;
    Ok(())
}
