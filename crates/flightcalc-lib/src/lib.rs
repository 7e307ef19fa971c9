//! flightcalc library entry points.
//!
//! This crate exposes unit-tagged velocity, distance, and fuel calculators for
//! a simplified vehicle model, together with the parameter configuration and
//! report rendering used by the CLI. Higher-level consumers should only depend
//! on the functions exported here instead of reimplementing the arithmetic.
//!

#![deny(warnings)]

pub mod constants;
pub mod error;
pub mod fuel;
pub mod kinematics;
pub mod params;
pub mod report;
pub mod units;
pub mod validation;

pub use error::{Error, Result};
pub use fuel::{calculate_burn_endurance, compute_remaining_fuel};
pub use kinematics::{compute_new_distance, compute_new_velocity};
pub use params::{FlightParameters, ParameterOverrides};
pub use report::{FlightReport, ReportFormat};
pub use units::{
    Hours, Kilograms, KilogramsPerSecond, Kilometers, KilometersPerHour, MetersPerSecond,
    MetersPerSecondSquared, Seconds,
};
pub use validation::parse_quantity;
