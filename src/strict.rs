//! Degree/radian conversions that give the same bits on every platform.
//!
//! Both conversions use the literal [`PI`] and a fixed order of operations.
//! The std `f64::to_radians` multiplies by a pre-computed `π/180` factor instead,
//! which can round differently in the last bit.

mod consts;

pub use consts::{HALF_TURN_DEG, PI};

/// Convert an angle from degrees to radians.
///
/// Computed as `(degrees * PI) / 180`. The result is not always exact
/// given the limitations of floating point numbers.
/// Infinities and NaN propagate as usual.
pub const fn to_radians(degrees: f64) -> f64 {
    // multiply first, the order is significant for the last bit
    (degrees * PI) / HALF_TURN_DEG
}

/// Convert an angle from radians to an approximately equivalent angle in degrees.
///
/// Computed as `(180 / PI) * radians`.
/// Do not expect `to_degrees(to_radians(x))` to give exactly `x` back.
pub const fn to_degrees(radians: f64) -> f64 {
    (HALF_TURN_DEG / PI) * radians
}
