//! Type-safe wrappers for physical units
//!
//! Every scalar handled by the calculator is wrapped in a newtype naming its
//! unit, so that mixing km/h with m/s (or seconds with hours) fails to compile
//! instead of silently producing a wrong number. Conversions between related
//! units are named methods backed by the factors in [`crate::constants`].
//!
//! All unit types serialize as bare JSON numbers.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::constants::{DISPLAY_DECIMALS, KMH_TO_MS_FACTOR, MS_TO_KMH_FACTOR, SECONDS_PER_HOUR};

/// Largest integer up to which every `f64` integer is exact (2^53).
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Round to [`DISPLAY_DECIMALS`] places and format with the shortest
/// representation, so `48879.99999999999` renders as `48880`.
///
/// Values too large to scale without losing precision are printed unrounded.
pub fn format_quantity(value: f64) -> String {
    let scale = 10f64.powi(DISPLAY_DECIMALS);
    let scaled = value * scale;
    let rounded = if scaled.is_finite() && scaled.abs() < EXACT_INTEGER_LIMIT {
        scaled.round() / scale
    } else {
        value
    };
    // Avoid printing "-0" for values that round to zero from below.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}

macro_rules! unit_display {
    ($ty:ident, $suffix:literal) => {
        impl $ty {
            /// Raw magnitude in this unit.
            pub fn value(self) -> f64 {
                self.0
            }

            /// Unit suffix used when rendering.
            pub const SUFFIX: &'static str = $suffix;
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", format_quantity(self.0), Self::SUFFIX)
            }
        }
    };
}

/// Kilometers per hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilometersPerHour(pub f64);

/// Meters per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersPerSecond(pub f64);

/// Meters per second squared (acceleration, negative for deceleration)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersPerSecondSquared(pub f64);

/// Seconds (durations)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

/// Hours (durations)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(pub f64);

/// Kilometers
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

/// Kilograms (fuel mass)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Kilograms per second (fuel burn rate)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilogramsPerSecond(pub f64);

unit_display!(KilometersPerHour, "km/h");
unit_display!(MetersPerSecond, "m/s");
unit_display!(MetersPerSecondSquared, "m/s^2");
unit_display!(Seconds, "s");
unit_display!(Hours, "h");
unit_display!(Kilometers, "km");
unit_display!(Kilograms, "kg");
unit_display!(KilogramsPerSecond, "kg/s");

impl KilometersPerHour {
    pub fn to_meters_per_second(self) -> MetersPerSecond {
        MetersPerSecond(self.0 * KMH_TO_MS_FACTOR)
    }
}

impl MetersPerSecond {
    pub fn to_kilometers_per_hour(self) -> KilometersPerHour {
        KilometersPerHour(self.0 * MS_TO_KMH_FACTOR)
    }
}

impl Seconds {
    pub fn to_hours(self) -> Hours {
        Hours(self.0 / SECONDS_PER_HOUR)
    }
}

/// a · t = Δv
impl Mul<Seconds> for MetersPerSecondSquared {
    type Output = MetersPerSecond;

    fn mul(self, rhs: Seconds) -> MetersPerSecond {
        MetersPerSecond(self.0 * rhs.0)
    }
}

/// v · t = Δd
impl Mul<Hours> for KilometersPerHour {
    type Output = Kilometers;

    fn mul(self, rhs: Hours) -> Kilometers {
        Kilometers(self.0 * rhs.0)
    }
}

/// rate · t = burned mass
impl Mul<Seconds> for KilogramsPerSecond {
    type Output = Kilograms;

    fn mul(self, rhs: Seconds) -> Kilograms {
        Kilograms(self.0 * rhs.0)
    }
}

impl Add for MetersPerSecond {
    type Output = MetersPerSecond;

    fn add(self, rhs: MetersPerSecond) -> MetersPerSecond {
        MetersPerSecond(self.0 + rhs.0)
    }
}

impl Add for Kilometers {
    type Output = Kilometers;

    fn add(self, rhs: Kilometers) -> Kilometers {
        Kilometers(self.0 + rhs.0)
    }
}

impl Sub for Kilograms {
    type Output = Kilograms;

    fn sub(self, rhs: Kilograms) -> Kilograms {
        Kilograms(self.0 - rhs.0)
    }
}
