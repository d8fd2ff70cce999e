//! Mathematical utilities for angles in degree and radian conventions.
//!
//! The simulator telemetry reports yaw/pitch/roll in degrees wrapping at
//! 360; polar terrain samples use radians. Helpers for both live here.

use std::f32::consts::PI;

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * 180.0 / PI
}

/// Wrap-around distance of an angle in degrees from 0°/360°.
///
/// Telemetry attitude angles live in [0, 360); an angle of 359.5° is
/// half a degree from level, not 359.5 degrees. Used by the attitude
/// gate in the map accumulator.
///
/// # Example
/// ```
/// use yatri_rover::core::math::deg_from_level;
///
/// assert!((deg_from_level(0.5) - 0.5).abs() < 1e-6);
/// assert!((deg_from_level(359.5) - 0.5).abs() < 1e-6);
/// assert!((deg_from_level(180.0) - 180.0).abs() < 1e-6);
/// ```
#[inline]
pub fn deg_from_level(deg: f32) -> f32 {
    let a = deg.rem_euclid(360.0);
    a.min(360.0 - a)
}

/// Clamp a value to a range.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Square of a value. Useful for avoiding `pow(x, 2)`.
#[inline]
pub fn sq(x: f32) -> f32 {
    x * x
}
