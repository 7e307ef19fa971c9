//! Unit conversion constants and the default scenario inputs.

/// Meters in one kilometer.
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Multiply a km/h value by this to obtain m/s (1000 / 3600).
pub const KMH_TO_MS_FACTOR: f64 = METERS_PER_KILOMETER / SECONDS_PER_HOUR;

/// Multiply a m/s value by this to obtain km/h (3600 / 1000).
pub const MS_TO_KMH_FACTOR: f64 = SECONDS_PER_HOUR / METERS_PER_KILOMETER;

/// Decimal places kept when rendering results as text.
pub const DISPLAY_DECIMALS: i32 = 6;

/// Default inputs used when no parameter file or flag overrides them.
pub mod defaults {
    pub const VELOCITY_KMH: f64 = 10_000.0;
    pub const ACCELERATION_MS2: f64 = 3.0;
    /// One hour.
    pub const DURATION_S: f64 = 3600.0;
    pub const DISTANCE_KM: f64 = 0.0;
    pub const FUEL_KG: f64 = 5000.0;
    pub const BURN_RATE_KG_S: f64 = 0.5;
}
