use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::fuel::{calculate_burn_endurance, compute_remaining_fuel};
use crate::kinematics::{compute_new_distance, compute_new_velocity};
use crate::params::FlightParameters;
use crate::units::{Kilograms, Kilometers, KilometersPerHour, Seconds};

/// Output encoding for a [`FlightReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Results of running every calculator over one set of parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightReport {
    pub parameters: FlightParameters,
    pub new_velocity_kmh: KilometersPerHour,
    pub new_distance_km: Kilometers,
    pub remaining_fuel_kg: Kilograms,
    /// Absent when the burn rate is zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burn_endurance_s: Option<Seconds>,
}

impl FlightReport {
    /// Validate `params` and run the velocity, distance, and fuel calculators.
    pub fn compute(params: &FlightParameters) -> Result<Self> {
        params.validate()?;

        let new_velocity_kmh =
            compute_new_velocity(params.acceleration(), params.velocity(), params.duration())?;
        let new_distance_km =
            compute_new_distance(params.distance(), params.velocity(), params.duration())?;
        let remaining_fuel_kg =
            compute_remaining_fuel(params.fuel(), params.burn_rate(), params.duration())?;
        let burn_endurance_s = calculate_burn_endurance(params.fuel(), params.burn_rate())?;

        Ok(Self {
            parameters: *params,
            new_velocity_kmh,
            new_distance_km,
            remaining_fuel_kg,
            burn_endurance_s,
        })
    }

    /// Render the report using the requested format.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)? + "\n"),
        }
    }

    fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", velocity_line(self.new_velocity_kmh));
        let _ = writeln!(buffer, "{}", distance_line(self.new_distance_km));
        let _ = writeln!(buffer, "{}", fuel_line(self.remaining_fuel_kg));
        buffer
    }
}

pub fn velocity_line(velocity: KilometersPerHour) -> String {
    format!("Corrected New Velocity: {velocity}")
}

pub fn distance_line(distance: Kilometers) -> String {
    format!("Corrected New Distance: {distance}")
}

pub fn fuel_line(fuel: Kilograms) -> String {
    format!("Corrected Remaining Fuel: {fuel}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn default_scenario_renders_three_lines() {
        let report = FlightReport::compute(&FlightParameters::default()).unwrap();
        let text = report.render(ReportFormat::Text).unwrap();
        assert_eq!(
            text,
            "Corrected New Velocity: 48880 km/h\n\
             Corrected New Distance: 10000 km\n\
             Corrected Remaining Fuel: 3200 kg\n"
        );
    }

    #[test]
    fn json_includes_inputs_and_endurance() {
        let report = FlightReport::compute(&FlightParameters::default()).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&report.render(ReportFormat::Json).unwrap()).unwrap();
        assert_eq!(json["parameters"]["fuel_kg"], 5000.0);
        assert_eq!(json["new_distance_km"], 10000.0);
        assert_eq!(json["remaining_fuel_kg"], 3200.0);
        assert_eq!(json["burn_endurance_s"], 10000.0);
    }

    #[test]
    fn zero_burn_rate_omits_endurance() {
        let params = FlightParameters {
            burn_rate_kg_s: 0.0,
            ..FlightParameters::default()
        };
        let report = FlightReport::compute(&params).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&report.render(ReportFormat::Json).unwrap()).unwrap();
        assert!(json.get("burn_endurance_s").is_none());
    }

    #[test]
    fn huge_finite_velocity_renders_as_a_number() {
        let params = FlightParameters {
            velocity_kmh: 1e305,
            ..FlightParameters::default()
        };
        let report = FlightReport::compute(&params).unwrap();
        let text = report.render(ReportFormat::Text).unwrap();
        assert!(!text.contains("inf"), "{text}");

        let json: serde_json::Value =
            serde_json::from_str(&report.render(ReportFormat::Json).unwrap()).unwrap();
        assert!(json["new_velocity_kmh"].is_number());
        assert!(json["new_distance_km"].is_number());
    }

    #[test]
    fn overflowing_velocity_fails_report() {
        let params = FlightParameters {
            acceleration_ms2: 1e300,
            duration_s: 1e10,
            burn_rate_kg_s: 0.0,
            ..FlightParameters::default()
        };
        assert!(matches!(
            FlightReport::compute(&params),
            Err(Error::NonFiniteResult { .. })
        ));
    }

    #[test]
    fn depleted_fuel_fails_whole_report() {
        let params = FlightParameters {
            fuel_kg: 100.0,
            ..FlightParameters::default()
        };
        assert!(matches!(
            FlightReport::compute(&params),
            Err(Error::FuelDepleted { .. })
        ));
    }
}
