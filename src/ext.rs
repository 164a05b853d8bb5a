//! Method syntax for the strict conversions

use crate::strict::{to_degrees, to_radians};

/// Convert angles between degrees and radians
/// with the deterministic formulas of the [`strict`](crate::strict) module.
///
/// The method names do not clash with the std `f64::to_radians` and `f64::to_degrees`,
/// so both can be used side by side.
pub trait StrictAngle: Copy {
    /// Treat the value as degrees and convert it to radians
    fn strict_to_radians(self) -> Self;

    /// Treat the value as radians and convert it to degrees
    fn strict_to_degrees(self) -> Self;
}

macro_rules! impl_strict_angle {
    ($t: ty) => {
        impl StrictAngle for $t {
            fn strict_to_radians(self) -> Self {
                to_radians(self)
            }

            fn strict_to_degrees(self) -> Self {
                to_degrees(self)
            }
        }
    };
}

impl_strict_angle!(f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strict::PI;

    #[test]
    fn same_bits_as_functions() {
        for x in [0.0_f64, -0.0, 1.0, -37.5, 90.0, 180.0, 1e-12, 1e12] {
            assert_eq!(x.strict_to_radians().to_bits(), to_radians(x).to_bits());
            assert_eq!(x.strict_to_degrees().to_bits(), to_degrees(x).to_bits());
        }
    }

    #[test]
    fn straight_angle() {
        assert_eq!(180.0_f64.strict_to_radians(), PI);
        assert_eq!(PI.strict_to_degrees(), to_degrees(PI));
    }

    #[test]
    fn non_finite() {
        assert_eq!(f64::INFINITY.strict_to_radians(), f64::INFINITY);
        assert_eq!(f64::NEG_INFINITY.strict_to_degrees(), f64::NEG_INFINITY);
        assert!(f64::NAN.strict_to_radians().is_nan());
        assert!(f64::NAN.strict_to_degrees().is_nan());
    }

    #[test]
    fn chained_round_trip() {
        let deg = 45.0_f64;
        let back = deg.strict_to_radians().strict_to_degrees();
        assert!((back - deg).abs() < 1e-9);
    }
}
