//! Global command-line options and numeric flag parsing.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use flightcalc_lib::{parse_quantity, Error as LibError, FlightParameters, ParameterOverrides};

use crate::output::OutputFormat;

/// Options accepted before or after any subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// JSON file with flight parameters; flags override its values.
    #[arg(long, global = true, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Current velocity in km/h.
    #[arg(long, global = true, value_name = "KMH", value_parser = parse_velocity_kmh, allow_negative_numbers = true)]
    pub velocity_kmh: Option<f64>,

    /// Constant acceleration in m/s² (negative to decelerate).
    #[arg(long, global = true, value_name = "MS2", value_parser = parse_acceleration_ms2, allow_negative_numbers = true)]
    pub acceleration_ms2: Option<f64>,

    /// Elapsed time in seconds.
    #[arg(long, global = true, value_name = "SECONDS", value_parser = parse_duration_s, allow_negative_numbers = true)]
    pub duration_s: Option<f64>,

    /// Distance already covered in km.
    #[arg(long, global = true, value_name = "KM", value_parser = parse_distance_km, allow_negative_numbers = true)]
    pub distance_km: Option<f64>,

    /// Fuel on board in kg.
    #[arg(long, global = true, value_name = "KG", value_parser = parse_fuel_kg, allow_negative_numbers = true)]
    pub fuel_kg: Option<f64>,

    /// Fuel burn rate in kg/s.
    #[arg(long, global = true, value_name = "KG_PER_S", value_parser = parse_burn_rate_kg_s, allow_negative_numbers = true)]
    pub burn_rate_kg_s: Option<f64>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl GlobalOptions {
    /// Flag values that replace parameter-file or default values.
    pub fn overrides(&self) -> ParameterOverrides {
        ParameterOverrides {
            velocity_kmh: self.velocity_kmh,
            acceleration_ms2: self.acceleration_ms2,
            duration_s: self.duration_s,
            distance_km: self.distance_km,
            fuel_kg: self.fuel_kg,
            burn_rate_kg_s: self.burn_rate_kg_s,
        }
    }

    /// Resolve parameters: defaults, then the parameter file, then flags.
    pub fn load_parameters(&self) -> Result<FlightParameters> {
        let base = match self.params.as_deref() {
            Some(path) => FlightParameters::from_path(path)
                .with_context(|| format!("failed to load parameters from {}", path.display()))?,
            None => FlightParameters::default(),
        };

        let params = base.with_overrides(&self.overrides());
        params
            .validate()
            .context("flight parameters failed validation")?;
        debug!(?params, "resolved flight parameters");
        Ok(params)
    }
}

pub fn parse_velocity_kmh(raw: &str) -> Result<f64, LibError> {
    parse_quantity("velocity_kmh", raw)
}

pub fn parse_acceleration_ms2(raw: &str) -> Result<f64, LibError> {
    parse_quantity("acceleration_ms2", raw)
}

pub fn parse_duration_s(raw: &str) -> Result<f64, LibError> {
    parse_quantity("duration_s", raw)
}

pub fn parse_distance_km(raw: &str) -> Result<f64, LibError> {
    parse_quantity("distance_km", raw)
}

pub fn parse_fuel_kg(raw: &str) -> Result<f64, LibError> {
    parse_quantity("fuel_kg", raw)
}

pub fn parse_burn_rate_kg_s(raw: &str) -> Result<f64, LibError> {
    parse_quantity("burn_rate_kg_s", raw)
}
