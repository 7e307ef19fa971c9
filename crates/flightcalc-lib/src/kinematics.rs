//! Constant-acceleration velocity and distance updates.
//!
//! Both calculators take unit-tagged inputs and validate them before doing
//! any arithmetic. Velocity updates go through m/s internally because the
//! acceleration is expressed in m/s²; distance updates convert the duration to
//! hours because the velocity is expressed in km/h.

use tracing::debug;

use crate::error::Result;
use crate::units::{Kilometers, KilometersPerHour, MetersPerSecondSquared, Seconds};
use crate::validation::{ensure_finite, ensure_finite_result, ensure_non_negative};

/// Compute the velocity reached after accelerating for `duration`.
///
/// Formula: v' = to_kmh(to_ms(v) + a × t)
///
/// # Arguments
/// - `acceleration`: m/s², negative values decelerate
/// - `velocity`: current velocity in km/h, must be non-negative
/// - `duration`: elapsed time in seconds, must be non-negative
///
/// # Returns
/// The new velocity in km/h. The result is negative when the deceleration
/// outlasts the current velocity; callers decide whether that is meaningful.
///
/// # Errors
/// [`crate::Error::InvalidArgument`] if any input is non-finite or if
/// `velocity` or `duration` is negative, and [`crate::Error::NonFiniteResult`]
/// if the result overflows.
///
/// # Examples
/// ```
/// use flightcalc_lib::kinematics::compute_new_velocity;
/// use flightcalc_lib::units::{KilometersPerHour, MetersPerSecondSquared, Seconds};
///
/// let v = compute_new_velocity(
///     MetersPerSecondSquared(3.0),
///     KilometersPerHour(10_000.0),
///     Seconds(3600.0),
/// )
/// .unwrap();
/// assert!((v.0 - 48_880.0).abs() < 1e-6);
/// ```
pub fn compute_new_velocity(
    acceleration: MetersPerSecondSquared,
    velocity: KilometersPerHour,
    duration: Seconds,
) -> Result<KilometersPerHour> {
    ensure_finite("acceleration_ms2", acceleration.0)?;
    ensure_non_negative("velocity_kmh", velocity.0)?;
    ensure_non_negative("duration_s", duration.0)?;

    let new_velocity = (velocity.to_meters_per_second() + acceleration * duration)
        .to_kilometers_per_hour();
    ensure_finite_result("new_velocity_kmh", new_velocity.0)?;

    debug!(
        acceleration_ms2 = acceleration.0,
        velocity_kmh = velocity.0,
        duration_s = duration.0,
        new_velocity_kmh = new_velocity.0,
        "computed new velocity"
    );

    Ok(new_velocity)
}

/// Compute the distance covered after travelling at `velocity` for `duration`.
///
/// Formula: d' = d + v × (t / 3600)
///
/// # Errors
/// [`crate::Error::InvalidArgument`] if any input is non-finite or negative,
/// and [`crate::Error::NonFiniteResult`] if the result overflows.
pub fn compute_new_distance(
    prior_distance: Kilometers,
    velocity: KilometersPerHour,
    duration: Seconds,
) -> Result<Kilometers> {
    ensure_non_negative("distance_km", prior_distance.0)?;
    ensure_non_negative("velocity_kmh", velocity.0)?;
    ensure_non_negative("duration_s", duration.0)?;

    let new_distance = prior_distance + velocity * duration.to_hours();
    ensure_finite_result("new_distance_km", new_distance.0)?;

    debug!(
        distance_km = prior_distance.0,
        velocity_kmh = velocity.0,
        duration_s = duration.0,
        new_distance_km = new_distance.0,
        "computed new distance"
    );

    Ok(new_distance)
}
