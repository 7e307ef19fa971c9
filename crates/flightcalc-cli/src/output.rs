//! Output format selection and single-quantity rendering.

use anyhow::Result;
use clap::ValueEnum;
use serde_json::{json, Map};

use flightcalc_lib::report::{distance_line, fuel_line, velocity_line};
use flightcalc_lib::{Kilograms, Kilometers, KilometersPerHour, ReportFormat};

/// Output format for results written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `Corrected ...` line per result.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

/// A single computed quantity, as printed by the per-quantity subcommands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    Velocity(KilometersPerHour),
    Distance(Kilometers),
    RemainingFuel(Kilograms),
}

impl Quantity {
    fn json_key(self) -> &'static str {
        match self {
            Quantity::Velocity(_) => "new_velocity_kmh",
            Quantity::Distance(_) => "new_distance_km",
            Quantity::RemainingFuel(_) => "remaining_fuel_kg",
        }
    }

    fn value(self) -> f64 {
        match self {
            Quantity::Velocity(v) => v.value(),
            Quantity::Distance(d) => d.value(),
            Quantity::RemainingFuel(f) => f.value(),
        }
    }

    /// Render the quantity in `format`, newline-terminated.
    pub fn render(self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => {
                let line = match self {
                    Quantity::Velocity(v) => velocity_line(v),
                    Quantity::Distance(d) => distance_line(d),
                    Quantity::RemainingFuel(f) => fuel_line(f),
                };
                Ok(line + "\n")
            }
            OutputFormat::Json => {
                let mut body = Map::new();
                body.insert(self.json_key().to_string(), json!(self.value()));
                Ok(serde_json::to_string_pretty(&body)? + "\n")
            }
        }
    }
}
