//! Fuel consumption calculations.
//!
//! This module handles fuel mass bookkeeping for a constant-rate burn,
//! including the endurance of a fuel load at a given burn rate.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::units::{Kilograms, KilogramsPerSecond, Seconds};
use crate::validation::{ensure_finite_result, ensure_non_negative};

/// Compute the fuel mass remaining after burning at `burn_rate` for `duration`.
///
/// Formula: remaining = available − burn_rate × duration
///
/// # Arguments
/// - `available`: fuel on board in kilograms
/// - `burn_rate`: consumption in kg/s
/// - `duration`: burn time in seconds
///
/// # Returns
/// The remaining fuel, guaranteed non-negative.
///
/// # Errors
/// - [`Error::InvalidArgument`] if any input is non-finite or negative.
/// - [`Error::FuelDepleted`] if the burn needs more fuel than is available.
///
/// # Examples
/// ```
/// use flightcalc_lib::fuel::compute_remaining_fuel;
/// use flightcalc_lib::units::{Kilograms, KilogramsPerSecond, Seconds};
/// use flightcalc_lib::Error;
///
/// let remaining =
///     compute_remaining_fuel(Kilograms(5000.0), KilogramsPerSecond(0.5), Seconds(3600.0))
///         .unwrap();
/// assert_eq!(remaining, Kilograms(3200.0));
///
/// let depleted =
///     compute_remaining_fuel(Kilograms(100.0), KilogramsPerSecond(0.5), Seconds(3600.0));
/// assert!(matches!(depleted, Err(Error::FuelDepleted { .. })));
/// ```
pub fn compute_remaining_fuel(
    available: Kilograms,
    burn_rate: KilogramsPerSecond,
    duration: Seconds,
) -> Result<Kilograms> {
    ensure_non_negative("fuel_kg", available.0)?;
    ensure_non_negative("burn_rate_kg_s", burn_rate.0)?;
    ensure_non_negative("duration_s", duration.0)?;

    let required = burn_rate * duration;
    let remaining = available - required;

    if remaining.0 < 0.0 {
        let endurance = calculate_burn_endurance(available, burn_rate)?;
        warn!(
            available_kg = available.0,
            required_kg = required.0,
            "burn exceeds available fuel"
        );
        return Err(Error::FuelDepleted {
            available_kg: available.0,
            required_kg: required.0,
            endurance_s: endurance.map(|seconds| seconds.0),
        });
    }

    debug!(
        fuel_kg = available.0,
        burn_rate_kg_s = burn_rate.0,
        duration_s = duration.0,
        remaining_fuel_kg = remaining.0,
        "computed remaining fuel"
    );

    Ok(remaining)
}

/// Calculate how long `available` fuel lasts at `burn_rate`.
///
/// Returns `None` when the burn rate is zero, since the fuel then never runs
/// out.
///
/// # Errors
/// [`Error::InvalidArgument`] if either input is non-finite or negative, and
/// [`Error::NonFiniteResult`] if the endurance overflows.
pub fn calculate_burn_endurance(
    available: Kilograms,
    burn_rate: KilogramsPerSecond,
) -> Result<Option<Seconds>> {
    ensure_non_negative("fuel_kg", available.0)?;
    ensure_non_negative("burn_rate_kg_s", burn_rate.0)?;

    if burn_rate.0 == 0.0 {
        return Ok(None);
    }

    let endurance = ensure_finite_result("burn_endurance_s", available.0 / burn_rate.0)?;
    Ok(Some(Seconds(endurance)))
}
