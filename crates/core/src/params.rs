//! Aircraft measurements consumed by the performance calculation.

use std::fmt;

use thiserror::Error;

use crate::units::{UnitSystem, convert_units};

/// Names one of the six measurements describing an aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    WingArea,
    Velocity,
    Altitude,
    Weight,
    LiftCoefficient,
    DragCoefficient,
}

impl Parameter {
    /// All parameters in the order they are collected from a user.
    pub const ALL: [Parameter; 6] = [
        Parameter::WingArea,
        Parameter::Velocity,
        Parameter::Altitude,
        Parameter::Weight,
        Parameter::LiftCoefficient,
        Parameter::DragCoefficient,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Parameter::WingArea => "wing area",
            Parameter::Velocity => "velocity",
            Parameter::Altitude => "altitude",
            Parameter::Weight => "weight",
            Parameter::LiftCoefficient => "lift coefficient (Cl)",
            Parameter::DragCoefficient => "drag coefficient (Cd)",
        }
    }

    /// Unit label for `unit`; `None` for the dimensionless coefficients.
    pub fn unit_label(&self, unit: UnitSystem) -> Option<&'static str> {
        let label = match (self, unit) {
            (Parameter::WingArea, UnitSystem::Si) => "m²",
            (Parameter::WingArea, UnitSystem::Imperial) => "ft²",
            (Parameter::Velocity, UnitSystem::Si) => "m/s",
            (Parameter::Velocity, UnitSystem::Imperial) => "knots",
            (Parameter::Altitude, UnitSystem::Si) => "m",
            (Parameter::Altitude, UnitSystem::Imperial) => "ft",
            (Parameter::Weight, UnitSystem::Si) => "N",
            (Parameter::Weight, UnitSystem::Imperial) => "lb",
            (Parameter::LiftCoefficient | Parameter::DragCoefficient, _) => return None,
        };
        Some(label)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rejected aircraft measurement.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    #[error("{parameter} must be greater than 0 (got {value})")]
    NonPositive { parameter: Parameter, value: f64 },
    #[error("{parameter} must be a finite number (got {value})")]
    NonFinite { parameter: Parameter, value: f64 },
}

/// Six SI measurements describing an aircraft in level flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftParameters {
    pub wing_area_m2: f64,
    pub velocity_m_s: f64,
    pub altitude_m: f64,
    /// Weight as quoted, before gravity normalization.
    pub weight_n: f64,
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
}

impl AircraftParameters {
    /// Build a validated parameter set from SI measurements.
    pub fn new(
        wing_area_m2: f64,
        velocity_m_s: f64,
        altitude_m: f64,
        weight_n: f64,
        lift_coefficient: f64,
        drag_coefficient: f64,
    ) -> Result<Self, ParameterError> {
        let params = Self {
            wing_area_m2,
            velocity_m_s,
            altitude_m,
            weight_n,
            lift_coefficient,
            drag_coefficient,
        };
        params.validate()?;
        Ok(params)
    }

    /// Build a validated parameter set from measurements in `unit`.
    ///
    /// Positivity is checked on the raw values; the conversion factors are all
    /// positive so it carries over to SI.
    pub fn from_units(
        unit: UnitSystem,
        wing_area: f64,
        velocity: f64,
        altitude: f64,
        weight: f64,
        lift_coefficient: f64,
        drag_coefficient: f64,
    ) -> Result<Self, ParameterError> {
        Self::new(
            wing_area,
            velocity,
            altitude,
            weight,
            lift_coefficient,
            drag_coefficient,
        )?;
        let (wing_area, velocity, altitude, weight) =
            convert_units(unit, wing_area, velocity, altitude, weight);
        Self::new(
            wing_area,
            velocity,
            altitude,
            weight,
            lift_coefficient,
            drag_coefficient,
        )
    }

    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::WingArea => self.wing_area_m2,
            Parameter::Velocity => self.velocity_m_s,
            Parameter::Altitude => self.altitude_m,
            Parameter::Weight => self.weight_n,
            Parameter::LiftCoefficient => self.lift_coefficient,
            Parameter::DragCoefficient => self.drag_coefficient,
        }
    }

    /// Check every field is finite and strictly positive.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for parameter in Parameter::ALL {
            check_positive(parameter, self.get(parameter))?;
        }
        Ok(())
    }
}

/// Check a single measurement is finite and strictly positive.
pub fn check_positive(parameter: Parameter, value: f64) -> Result<f64, ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NonFinite { parameter, value });
    }
    if value <= 0.0 {
        return Err(ParameterError::NonPositive { parameter, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_fields() {
        let err = AircraftParameters::new(360.0, 605.0, 0.0, 1_090_000.0, 0.125, 0.004)
            .unwrap_err();
        assert_eq!(
            err,
            ParameterError::NonPositive {
                parameter: Parameter::Altitude,
                value: 0.0
            }
        );
    }

    #[test]
    fn rejects_nan_before_sign_check() {
        let err = AircraftParameters::new(f64::NAN, 605.0, 1.0, 1.0, 0.125, 0.004).unwrap_err();
        assert!(matches!(
            err,
            ParameterError::NonFinite {
                parameter: Parameter::WingArea,
                ..
            }
        ));
    }

    #[test]
    fn from_units_converts_imperial() {
        let params = AircraftParameters::from_units(
            UnitSystem::Imperial,
            1076.4,
            100.0,
            3281.0,
            1000.0,
            0.5,
            0.02,
        )
        .expect("valid");
        assert!((params.wing_area_m2 - 100.0).abs() < 1e-9);
        assert!((params.altitude_m - 1000.0).abs() < 1e-9);
        assert_eq!(params.lift_coefficient, 0.5);
        assert_eq!(params.drag_coefficient, 0.02);
    }

    #[test]
    fn coefficients_have_no_units() {
        assert_eq!(Parameter::LiftCoefficient.unit_label(UnitSystem::Imperial), None);
        assert_eq!(Parameter::Weight.unit_label(UnitSystem::Imperial), Some("lb"));
    }
}
