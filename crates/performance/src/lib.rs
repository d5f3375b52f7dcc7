//! Steady level-flight performance: lift, drag, stall speed, and a readiness verdict.

use std::fmt;

use aero_atmosphere::air_density;
use aero_core::constants::{GRAVITY, REFERENCE_GRAVITY};
use aero_core::{AircraftParameters, ParameterError};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Why the stall-speed denominator vanished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    ZeroAirDensity,
    ZeroWingArea,
    ZeroLiftCoefficient,
    /// Every factor is positive but their product is below the smallest `f64`.
    DenominatorUnderflow,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Degeneracy::ZeroAirDensity => "air density is zero at this altitude",
            Degeneracy::ZeroWingArea => "wing area is zero",
            Degeneracy::ZeroLiftCoefficient => "lift coefficient is zero",
            Degeneracy::DenominatorUnderflow => {
                "air density x wing area x lift coefficient underflows to zero"
            }
        };
        f.write_str(text)
    }
}

/// Derived quantity of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    NormalizedWeight,
    Lift,
    Drag,
    StallSpeed,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Quantity::NormalizedWeight => "normalized weight",
            Quantity::Lift => "lift",
            Quantity::Drag => "drag",
            Quantity::StallSpeed => "stall speed",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PerformanceError {
    #[error("invalid aircraft parameters: {0}")]
    InvalidInput(#[from] ParameterError),
    #[error("stall speed is undefined: {0}")]
    DegenerateComputation(Degeneracy),
    #[error("{quantity} is out of range for these inputs (got {value})")]
    NonFiniteResult { quantity: Quantity, value: f64 },
}

/// Outcome of the readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Ready,
    StallWarning,
    InsufficientLift,
}

impl Verdict {
    /// Human-readable summary shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Ready => "Aircraft is ready for flight!",
            Verdict::StallWarning => "Warning: Velocity is below stall speed. Aircraft will stall.",
            Verdict::InsufficientLift => "Aircraft is not generating enough lift for flight.",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Verdict::Ready => "READY",
            Verdict::StallWarning => "STALL_WARNING",
            Verdict::InsufficientLift => "INSUFFICIENT_LIFT",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of a single performance calculation. Every figure is finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightReport {
    pub air_density_kg_m3: f64,
    pub lift_n: f64,
    pub drag_n: f64,
    pub stall_speed_m_s: f64,
    /// Weight after gravity normalization; the figure lift is judged against.
    pub normalized_weight_n: f64,
    pub verdict: Verdict,
}

/// Rescale a quoted weight from the reference gravity to [`GRAVITY`].
#[inline]
pub fn normalize_weight(weight_n: f64) -> f64 {
    (weight_n / REFERENCE_GRAVITY) * GRAVITY
}

/// Lift force (N).
pub fn lift(
    lift_coefficient: f64,
    air_density_kg_m3: f64,
    wing_area_m2: f64,
    velocity_m_s: f64,
) -> f64 {
    0.5 * lift_coefficient * air_density_kg_m3 * wing_area_m2 * velocity_m_s.powi(2)
}

/// Drag force (N).
pub fn drag(
    drag_coefficient: f64,
    air_density_kg_m3: f64,
    wing_area_m2: f64,
    velocity_m_s: f64,
) -> f64 {
    0.5 * drag_coefficient * air_density_kg_m3 * wing_area_m2 * velocity_m_s.powi(2)
}

/// Minimum speed (m/s) at which lift supports `weight_n`.
pub fn stall_speed(
    weight_n: f64,
    air_density_kg_m3: f64,
    wing_area_m2: f64,
    lift_coefficient: f64,
) -> Result<f64, PerformanceError> {
    let degeneracy = if air_density_kg_m3 == 0.0 {
        Some(Degeneracy::ZeroAirDensity)
    } else if wing_area_m2 == 0.0 {
        Some(Degeneracy::ZeroWingArea)
    } else if lift_coefficient == 0.0 {
        Some(Degeneracy::ZeroLiftCoefficient)
    } else {
        None
    };
    if let Some(degeneracy) = degeneracy {
        return Err(PerformanceError::DegenerateComputation(degeneracy));
    }
    let denominator = air_density_kg_m3 * wing_area_m2 * lift_coefficient;
    if denominator == 0.0 {
        return Err(PerformanceError::DegenerateComputation(
            Degeneracy::DenominatorUnderflow,
        ));
    }
    finite(Quantity::StallSpeed, ((2.0 * weight_n) / denominator).sqrt())
}

/// Readiness verdict. The checks run in priority order, so an aircraft above
/// stall speed that still lacks lift reports [`Verdict::InsufficientLift`].
pub fn classify(lift_n: f64, weight_n: f64, velocity_m_s: f64, stall_speed_m_s: f64) -> Verdict {
    if lift_n >= weight_n && velocity_m_s > stall_speed_m_s {
        Verdict::Ready
    } else if velocity_m_s <= stall_speed_m_s {
        Verdict::StallWarning
    } else {
        Verdict::InsufficientLift
    }
}

/// Compute the full flight report for SI parameters.
pub fn compute_report(params: &AircraftParameters) -> Result<FlightReport, PerformanceError> {
    if params.wing_area_m2 == 0.0 {
        return Err(degenerate(Degeneracy::ZeroWingArea));
    }
    if params.lift_coefficient == 0.0 {
        return Err(degenerate(Degeneracy::ZeroLiftCoefficient));
    }
    params.validate()?;

    let rho = air_density(params.altitude_m);
    if rho == 0.0 {
        return Err(degenerate(Degeneracy::ZeroAirDensity));
    }

    let weight = finite(Quantity::NormalizedWeight, normalize_weight(params.weight_n))?;
    let lift_n = finite(
        Quantity::Lift,
        lift(params.lift_coefficient, rho, params.wing_area_m2, params.velocity_m_s),
    )?;
    let drag_n = finite(
        Quantity::Drag,
        drag(params.drag_coefficient, rho, params.wing_area_m2, params.velocity_m_s),
    )?;
    let stall = stall_speed(weight, rho, params.wing_area_m2, params.lift_coefficient)
        .inspect_err(|err| warn!(%err, "stall speed cannot be computed"))?;
    let verdict = classify(lift_n, weight, params.velocity_m_s, stall);

    debug!(
        altitude_m = params.altitude_m,
        air_density = rho,
        lift_n,
        drag_n,
        stall_speed_m_s = stall,
        %verdict,
        "computed flight report"
    );

    Ok(FlightReport {
        air_density_kg_m3: rho,
        lift_n,
        drag_n,
        stall_speed_m_s: stall,
        normalized_weight_n: weight,
        verdict,
    })
}

fn degenerate(degeneracy: Degeneracy) -> PerformanceError {
    warn!(%degeneracy, "stall speed cannot be computed");
    PerformanceError::DegenerateComputation(degeneracy)
}

fn finite(quantity: Quantity, value: f64) -> Result<f64, PerformanceError> {
    if value.is_finite() {
        Ok(value)
    } else {
        warn!(%quantity, value, "result overflowed");
        Err(PerformanceError::NonFiniteResult { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aero_core::Parameter;

    fn concorde() -> AircraftParameters {
        AircraftParameters::new(360.0, 605.0, 17_770.0, 1_090_000.0, 0.125, 0.004).unwrap()
    }

    #[test]
    fn verdict_priority_order() {
        assert_eq!(classify(100.0, 100.0, 50.0, 40.0), Verdict::Ready);
        assert_eq!(classify(50.0, 100.0, 30.0, 40.0), Verdict::StallWarning);
        assert_eq!(classify(50.0, 100.0, 50.0, 40.0), Verdict::InsufficientLift);
        // at exactly stall speed the aircraft is not ready even with ample lift
        assert_eq!(classify(200.0, 100.0, 40.0, 40.0), Verdict::StallWarning);
    }

    #[test]
    fn weight_is_normalized_even_for_si() {
        let w = normalize_weight(1_090_000.0);
        assert!((w - 1_090_444.63).abs() < 0.01, "w = {w}");
    }

    #[test]
    fn concorde_is_ready() {
        let report = compute_report(&concorde()).unwrap();
        assert_eq!(report.air_density_kg_m3, 0.3639);
        let expected_lift = 0.5 * 0.125 * 0.3639 * 360.0 * 605.0_f64.powi(2);
        assert!((report.lift_n - expected_lift).abs() < 1e-6);
        assert!((report.stall_speed_m_s - 364.94).abs() < 0.01);
        assert_eq!(report.verdict, Verdict::Ready);
    }

    #[test]
    fn slow_concorde_stalls() {
        let params = AircraftParameters {
            velocity_m_s: 200.0,
            ..concorde()
        };
        let report = compute_report(&params).unwrap();
        assert_eq!(report.verdict, Verdict::StallWarning);
        assert!(report.lift_n < report.normalized_weight_n);
    }

    #[test]
    fn zero_lift_coefficient_is_degenerate() {
        let params = AircraftParameters {
            lift_coefficient: 0.0,
            ..concorde()
        };
        assert_eq!(
            compute_report(&params),
            Err(PerformanceError::DegenerateComputation(
                Degeneracy::ZeroLiftCoefficient
            ))
        );
    }

    #[test]
    fn vacuum_is_degenerate() {
        let params = AircraftParameters {
            altitude_m: 80_000.0,
            ..concorde()
        };
        assert_eq!(
            compute_report(&params),
            Err(PerformanceError::DegenerateComputation(
                Degeneracy::ZeroAirDensity
            ))
        );
    }

    #[test]
    fn negative_weight_is_invalid_input() {
        let params = AircraftParameters {
            weight_n: -1.0,
            ..concorde()
        };
        assert!(matches!(
            compute_report(&params),
            Err(PerformanceError::InvalidInput(ParameterError::NonPositive {
                parameter: Parameter::Weight,
                ..
            }))
        ));
    }

    #[test]
    fn stall_speed_rejects_zero_denominator() {
        assert!(stall_speed(1000.0, 0.0, 10.0, 0.5).is_err());
        assert!(stall_speed(1000.0, 1.225, 0.0, 0.5).is_err());
        let v = stall_speed(1000.0, 1.225, 10.0, 0.5).unwrap();
        assert!((v - (2000.0_f64 / 6.125).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn tiny_wing_and_coefficient_underflow_is_degenerate() {
        let params = AircraftParameters::new(1e-200, 50.0, 100.0, 1000.0, 1e-200, 0.02).unwrap();
        assert_eq!(
            compute_report(&params),
            Err(PerformanceError::DegenerateComputation(
                Degeneracy::DenominatorUnderflow
            ))
        );
    }

    #[test]
    fn stall_speed_overflow_is_rejected() {
        assert!(matches!(
            stall_speed(1e300, 1e-10, 1e-10, 1e-10),
            Err(PerformanceError::NonFiniteResult {
                quantity: Quantity::StallSpeed,
                ..
            })
        ));
    }

    #[test]
    fn overflowing_lift_is_rejected() {
        let params = AircraftParameters::new(1e10, 1e160, 100.0, 1000.0, 0.5, 0.02).unwrap();
        let err = compute_report(&params).unwrap_err();
        assert!(
            matches!(
                err,
                PerformanceError::NonFiniteResult {
                    quantity: Quantity::Lift,
                    ..
                }
            ),
            "unexpected error: {err}"
        );
    }
}
