//! Flight parameter configuration.
//!
//! [`FlightParameters`] gathers every input of a calculation run under a named
//! field, so callers never pass bare positional numbers. Parameters can be
//! loaded from a JSON document; missing fields fall back to the default
//! scenario.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::constants::defaults;
use crate::error::{Error, Result};
use crate::units::{
    Kilograms, KilogramsPerSecond, Kilometers, KilometersPerHour, MetersPerSecondSquared, Seconds,
};
use crate::validation::{ensure_finite, ensure_non_negative};

/// Field names accepted in a parameter document.
pub const FIELD_NAMES: [&str; 6] = [
    "velocity_kmh",
    "acceleration_ms2",
    "duration_s",
    "distance_km",
    "fuel_kg",
    "burn_rate_kg_s",
];

/// Inputs for a single calculation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlightParameters {
    /// Current velocity (km/h).
    pub velocity_kmh: f64,
    /// Constant acceleration (m/s²); negative decelerates.
    pub acceleration_ms2: f64,
    /// Elapsed time (s).
    pub duration_s: f64,
    /// Distance already covered (km).
    pub distance_km: f64,
    /// Fuel on board (kg).
    pub fuel_kg: f64,
    /// Fuel consumption (kg/s).
    pub burn_rate_kg_s: f64,
}

impl Default for FlightParameters {
    fn default() -> Self {
        Self {
            velocity_kmh: defaults::VELOCITY_KMH,
            acceleration_ms2: defaults::ACCELERATION_MS2,
            duration_s: defaults::DURATION_S,
            distance_km: defaults::DISTANCE_KM,
            fuel_kg: defaults::FUEL_KG,
            burn_rate_kg_s: defaults::BURN_RATE_KG_S,
        }
    }
}

/// Per-field replacements layered on top of a [`FlightParameters`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParameterOverrides {
    pub velocity_kmh: Option<f64>,
    pub acceleration_ms2: Option<f64>,
    pub duration_s: Option<f64>,
    pub distance_km: Option<f64>,
    pub fuel_kg: Option<f64>,
    pub burn_rate_kg_s: Option<f64>,
}

impl FlightParameters {
    /// Load parameters from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ParameterFile {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded parameter file");
        Self::from_json_str(&contents)
    }

    /// Parse parameters from a JSON object.
    ///
    /// # Errors
    /// - [`Error::InvalidParameters`] if the document is not a JSON object or
    ///   names an unknown field.
    /// - [`Error::InvalidArgument`] if a field is not a number (including
    ///   numbers given as strings such as `"10000"`) or breaks a range rule.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let document: Value =
            serde_json::from_str(contents).map_err(|err| Error::InvalidParameters {
                message: err.to_string(),
            })?;

        let fields = document
            .as_object()
            .ok_or_else(|| Error::InvalidParameters {
                message: "parameter document must be a JSON object".to_string(),
            })?;

        for (key, value) in fields {
            if !FIELD_NAMES.contains(&key.as_str()) {
                return Err(Error::InvalidParameters {
                    message: format!(
                        "unknown field `{key}`, expected one of: {}",
                        FIELD_NAMES.join(", ")
                    ),
                });
            }
            if !value.is_number() {
                return Err(Error::invalid_argument(
                    key.as_str(),
                    value,
                    "must be a number",
                ));
            }
        }

        let params: FlightParameters = serde_json::from_value(document)?;
        params.validate()?;
        Ok(params)
    }

    /// Replace every field that has an override.
    pub fn with_overrides(self, overrides: &ParameterOverrides) -> Self {
        Self {
            velocity_kmh: overrides.velocity_kmh.unwrap_or(self.velocity_kmh),
            acceleration_ms2: overrides.acceleration_ms2.unwrap_or(self.acceleration_ms2),
            duration_s: overrides.duration_s.unwrap_or(self.duration_s),
            distance_km: overrides.distance_km.unwrap_or(self.distance_km),
            fuel_kg: overrides.fuel_kg.unwrap_or(self.fuel_kg),
            burn_rate_kg_s: overrides.burn_rate_kg_s.unwrap_or(self.burn_rate_kg_s),
        }
    }

    /// Check every field against its range rule, naming the first offender.
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("velocity_kmh", self.velocity_kmh)?;
        ensure_finite("acceleration_ms2", self.acceleration_ms2)?;
        ensure_non_negative("duration_s", self.duration_s)?;
        ensure_non_negative("distance_km", self.distance_km)?;
        ensure_non_negative("fuel_kg", self.fuel_kg)?;
        ensure_non_negative("burn_rate_kg_s", self.burn_rate_kg_s)?;
        Ok(())
    }

    pub fn velocity(&self) -> KilometersPerHour {
        KilometersPerHour(self.velocity_kmh)
    }

    pub fn acceleration(&self) -> MetersPerSecondSquared {
        MetersPerSecondSquared(self.acceleration_ms2)
    }

    pub fn duration(&self) -> Seconds {
        Seconds(self.duration_s)
    }

    pub fn distance(&self) -> Kilometers {
        Kilometers(self.distance_km)
    }

    pub fn fuel(&self) -> Kilograms {
        Kilograms(self.fuel_kg)
    }

    pub fn burn_rate(&self) -> KilogramsPerSecond {
        KilogramsPerSecond(self.burn_rate_kg_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_scenario() {
        let params = FlightParameters::default();
        assert_eq!(params.velocity_kmh, 10_000.0);
        assert_eq!(params.acceleration_ms2, 3.0);
        assert_eq!(params.duration_s, 3600.0);
        assert_eq!(params.distance_km, 0.0);
        assert_eq!(params.fuel_kg, 5000.0);
        assert_eq!(params.burn_rate_kg_s, 0.5);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let params = FlightParameters::from_json_str(r#"{ "fuel_kg": 100 }"#).unwrap();
        assert_eq!(params.fuel_kg, 100.0);
        assert_eq!(params.velocity_kmh, defaults::VELOCITY_KMH);
    }

    #[test]
    fn string_valued_number_is_invalid_argument() {
        let err = FlightParameters::from_json_str(r#"{ "velocity_kmh": "10000" }"#).unwrap_err();
        match err {
            Error::InvalidArgument { name, value, .. } => {
                assert_eq!(name, "velocity_kmh");
                assert_eq!(value, "\"10000\"");
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = FlightParameters::from_json_str(r#"{ "velocity": 1 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidParameters { .. }));
        assert!(err.to_string().contains("velocity_kmh"));
    }

    #[test]
    fn non_object_document_is_rejected() {
        let err = FlightParameters::from_json_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, Error::InvalidParameters { .. }));
    }

    #[test]
    fn negative_duration_fails_validation() {
        let err = FlightParameters::from_json_str(r#"{ "duration_s": -1 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { ref name, .. } if name == "duration_s"));
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let overrides = ParameterOverrides {
            duration_s: Some(60.0),
            ..ParameterOverrides::default()
        };
        let params = FlightParameters::default().with_overrides(&overrides);
        assert_eq!(params.duration_s, 60.0);
        assert_eq!(params.fuel_kg, defaults::FUEL_KG);
    }
}
