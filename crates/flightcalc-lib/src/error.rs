use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the flightcalc library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A numeric input was not a finite number, or a quantity that must be
    /// non-negative was negative.
    #[error("invalid argument {name}: {reason}, got {value}")]
    InvalidArgument {
        name: String,
        value: String,
        reason: String,
    },

    /// Finite inputs produced a result that overflowed the `f64` range.
    #[error("{name} is not representable: finite inputs produced {value}")]
    NonFiniteResult { name: String, value: f64 },

    /// A burn would consume more fuel than is available.
    #[error(
        "fuel depleted: burn requires {required_kg} kg but only {available_kg} kg is available{}",
        format_endurance(.endurance_s)
    )]
    FuelDepleted {
        available_kg: f64,
        required_kg: f64,
        endurance_s: Option<f64>,
    },

    /// Raised when a parameter document is structurally invalid.
    #[error("invalid flight parameters: {message}")]
    InvalidParameters { message: String },

    /// Raised when a parameter file could not be read.
    #[error("failed to read parameter file {path}")]
    ParameterFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for JSON (de)serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build an [`Error::InvalidArgument`] from any displayable offending value.
    pub fn invalid_argument(
        name: impl Into<String>,
        value: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidArgument {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

fn format_endurance(endurance_s: &Option<f64>) -> String {
    match endurance_s {
        Some(seconds) => format!(" (fuel lasts {seconds} s at this burn rate)"),
        None => String::new(),
    }
}
