//! Render flight reports for the console.

use std::io::{self, Write};

use aero_performance::{FlightReport, Verdict};
use serde::Serialize;
use thiserror::Error;

const HEADER: &str = "=== Aircraft Flight Report ===";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the plain-text report, optionally headed by the aircraft name.
pub fn write_text(
    writer: &mut dyn Write,
    aircraft: Option<&str>,
    report: &FlightReport,
) -> Result<(), ExportError> {
    writeln!(writer, "{HEADER}")?;
    if let Some(name) = aircraft {
        writeln!(writer, "Aircraft: {name}")?;
    }
    writeln!(writer, "Air density: {:.3} kg/m³", report.air_density_kg_m3)?;
    writeln!(writer, "Lift Force: {:.2} N", report.lift_n)?;
    writeln!(writer, "Drag Force: {:.2} N", report.drag_n)?;
    writeln!(writer, "Stall Speed: {:.2} m/s", report.stall_speed_m_s)?;
    writeln!(writer, "{}", report.verdict.message())?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    aircraft: Option<&'a str>,
    air_density_kg_m3: f64,
    lift_n: f64,
    drag_n: f64,
    stall_speed_m_s: f64,
    normalized_weight_n: f64,
    verdict: Verdict,
    message: &'static str,
}

/// Write the report as a pretty-printed JSON object followed by a newline.
pub fn write_json(
    writer: &mut dyn Write,
    aircraft: Option<&str>,
    report: &FlightReport,
) -> Result<(), ExportError> {
    let doc = JsonReport {
        aircraft,
        air_density_kg_m3: report.air_density_kg_m3,
        lift_n: report.lift_n,
        drag_n: report.drag_n,
        stall_speed_m_s: report.stall_speed_m_s,
        normalized_weight_n: report.normalized_weight_n,
        verdict: report.verdict,
        message: report.verdict.message(),
    };
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}

/// Write a list of preset names as a JSON array.
pub fn write_names_json(writer: &mut dyn Write, names: &[&str]) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut *writer, names)?;
    writeln!(writer)?;
    Ok(())
}
