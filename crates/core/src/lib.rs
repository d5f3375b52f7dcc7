//! Core units, constants, and shared primitives for the Flight Calculator workspace.

pub mod params;

pub use params::{AircraftParameters, Parameter, ParameterError};
pub use units::{UnitSystem, convert_units};

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Gravitational acceleration used when normalizing aircraft weight (m/s²).
    pub const GRAVITY: f64 = 9.81;
    /// Reference gravity the raw weight figures are assumed to be quoted against (m/s²).
    pub const REFERENCE_GRAVITY: f64 = 9.806;
    /// Square feet per square metre.
    pub const FT2_PER_M2: f64 = 10.764;
    /// Metres per second per knot.
    pub const MS_PER_KNOT: f64 = 0.51444;
    /// Feet per metre.
    pub const FT_PER_M: f64 = 3.281;
    /// Newtons per pound-force.
    pub const N_PER_LBF: f64 = 4.448;
}

/// Unit systems and conversion helpers.
pub mod units {
    use std::fmt;
    use std::str::FromStr;

    use super::constants::{FT_PER_M, FT2_PER_M2, MS_PER_KNOT, N_PER_LBF};

    /// Unit system raw measurements are expressed in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum UnitSystem {
        /// m², m/s, m, N.
        #[default]
        Si,
        /// ft², knots, ft, lb.
        Imperial,
    }

    impl UnitSystem {
        pub fn label(&self) -> &'static str {
            match self {
                UnitSystem::Si => "SI",
                UnitSystem::Imperial => "Imperial",
            }
        }
    }

    impl fmt::Display for UnitSystem {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.label())
        }
    }

    /// Returned when a unit system name is neither `SI` nor `Imperial`.
    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    #[error("unknown unit system '{0}' (expected SI or Imperial)")]
    pub struct UnknownUnitSystem(pub String);

    impl FromStr for UnitSystem {
        type Err = UnknownUnitSystem;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "si" => Ok(UnitSystem::Si),
                "imperial" => Ok(UnitSystem::Imperial),
                _ => Err(UnknownUnitSystem(s.trim().to_string())),
            }
        }
    }

    /// Convert square feet to square metres.
    #[inline]
    pub fn ft2_to_m2(v: f64) -> f64 {
        v / FT2_PER_M2
    }

    /// Convert square metres to square feet.
    #[inline]
    pub fn m2_to_ft2(v: f64) -> f64 {
        v * FT2_PER_M2
    }

    /// Convert knots to metres per second.
    #[inline]
    pub fn knots_to_ms(v: f64) -> f64 {
        v * MS_PER_KNOT
    }

    /// Convert metres per second to knots.
    #[inline]
    pub fn ms_to_knots(v: f64) -> f64 {
        v / MS_PER_KNOT
    }

    /// Convert feet to metres.
    #[inline]
    pub fn ft_to_m(v: f64) -> f64 {
        v / FT_PER_M
    }

    /// Convert metres to feet.
    #[inline]
    pub fn m_to_ft(v: f64) -> f64 {
        v * FT_PER_M
    }

    /// Convert pounds-force to newtons.
    #[inline]
    pub fn lbf_to_n(v: f64) -> f64 {
        v * N_PER_LBF
    }

    /// Convert newtons to pounds-force.
    #[inline]
    pub fn n_to_lbf(v: f64) -> f64 {
        v / N_PER_LBF
    }

    /// Bring `(wing_area, velocity, altitude, weight)` from `unit` into SI.
    ///
    /// SI input is returned untouched. Lift and drag coefficients are
    /// dimensionless and never pass through here.
    pub fn convert_units(
        unit: UnitSystem,
        wing_area: f64,
        velocity: f64,
        altitude: f64,
        weight: f64,
    ) -> (f64, f64, f64, f64) {
        match unit {
            UnitSystem::Si => (wing_area, velocity, altitude, weight),
            UnitSystem::Imperial => (
                ft2_to_m2(wing_area),
                knots_to_ms(velocity),
                ft_to_m(altitude),
                lbf_to_n(weight),
            ),
        }
    }

}
