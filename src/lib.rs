//! Aircraft flight-readiness calculations shared by every front end.
//!
//! Air density comes from a stepped standard-atmosphere table; lift, drag and
//! stall speed follow the dynamic-pressure formulas; the verdict says whether
//! the aircraft is ready to fly. Keeping this logic in a library crate lets the
//! CLI (and any later front end) share it.

pub use aero_atmosphere as atmosphere;
pub use aero_config as config;
pub use aero_export as export;
pub use aero_performance as performance;

pub use aero_core::{constants, params, units};

pub use aero_atmosphere::air_density;
pub use aero_config::{CatalogError, PresetCatalog, PresetEntry, lookup_preset};
pub use aero_core::{AircraftParameters, Parameter, ParameterError, UnitSystem, convert_units};
pub use aero_performance::{FlightReport, PerformanceError, Verdict, compute_report};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
