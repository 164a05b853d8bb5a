/// The `f64` value closest to π, the ratio of the circumference of a circle to its diameter.
///
/// Written out as a literal so that no platform constant is involved.
/// It has the same bits as `core::f64::consts::PI`.
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793;

/// Degrees in a straight angle
pub const HALF_TURN_DEG: f64 = 180.0;
