//! Prompt-driven session: pick a preset or enter measurements, then print the report.

use std::io::{BufRead, Write};

use flight_calculator::config::PresetCatalog;
use flight_calculator::params::check_positive;
use flight_calculator::{
    AircraftParameters, Parameter, ParameterError, PerformanceError, UnitSystem, compute_report,
};
use tracing::{debug, warn};

use super::{OutputFormat, render};

const CUSTOM: &str = "custom";

enum Choice {
    Preset(String),
    Custom,
}

pub(crate) struct Session<R, W> {
    input: R,
    out: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub(crate) fn new(input: R, out: W, format: OutputFormat) -> Self {
        Self { input, out, format }
    }

    /// Run calculations until the user declines another one or input ends.
    pub(crate) fn run(&mut self, catalog: &PresetCatalog) -> anyhow::Result<()> {
        writeln!(self.out, "=== Aircraft Flight Calculator ===")?;
        writeln!(
            self.out,
            "Check whether your aircraft can lift off and sustain flight."
        )?;

        loop {
            if !self.calculate_once(catalog)? {
                break;
            }
            match self.prompt("Run another calculation? (y/n): ")? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => continue,
                _ => break,
            }
        }
        Ok(())
    }

    /// One full calculation; `false` when input ended before it completed.
    fn calculate_once(&mut self, catalog: &PresetCatalog) -> anyhow::Result<bool> {
        let Some(choice) = self.choose_aircraft(catalog)? else {
            return Ok(false);
        };

        let (name, params) = match choice {
            Choice::Preset(name) => {
                let params = catalog.lookup(&name)?;
                (Some(name), Ok(params))
            }
            Choice::Custom => match self.read_custom()? {
                Some(params) => (None, params),
                None => return Ok(false),
            },
        };

        writeln!(self.out)?;
        let outcome = params
            .map_err(PerformanceError::from)
            .and_then(|params| compute_report(&params));
        match outcome {
            Ok(report) => render(&mut self.out, self.format, name.as_deref(), &report)?,
            Err(err) => {
                warn!(%err, "calculation failed");
                writeln!(self.out, "Calculation failed: {err}")?;
            }
        }
        writeln!(self.out)?;
        Ok(true)
    }

    fn choose_aircraft(&mut self, catalog: &PresetCatalog) -> anyhow::Result<Option<Choice>> {
        writeln!(self.out, "\nAvailable aircraft presets:")?;
        for name in catalog.names() {
            writeln!(self.out, " - {name}")?;
        }
        writeln!(self.out, " - {CUSTOM}")?;

        loop {
            let Some(choice) = self.prompt("Enter aircraft name or 'custom' (case-sensitive): ")?
            else {
                return Ok(None);
            };
            if catalog.contains(&choice) {
                debug!(preset = %choice, "preset selected");
                return Ok(Some(Choice::Preset(choice)));
            }
            if choice == CUSTOM {
                return Ok(Some(Choice::Custom));
            }
            writeln!(self.out, "Invalid choice. Choose from the list.")?;
        }
    }

    /// Read units and measurements. The inner result fails when a value that
    /// was valid as typed overflows during unit conversion.
    fn read_custom(
        &mut self,
    ) -> anyhow::Result<Option<Result<AircraftParameters, ParameterError>>> {
        let unit = loop {
            let Some(raw) = self.prompt("Choose your units (SI or Imperial): ")? else {
                return Ok(None);
            };
            match raw.parse::<UnitSystem>() {
                Ok(unit) => break unit,
                Err(err) => writeln!(self.out, "{err}")?,
            }
        };

        let mut values = [0.0; 6];
        for (slot, parameter) in values.iter_mut().zip(Parameter::ALL) {
            let Some(value) = self.read_positive(parameter, unit)? else {
                return Ok(None);
            };
            *slot = value;
        }
        let [area, velocity, altitude, weight, cl, cd] = values;
        Ok(Some(AircraftParameters::from_units(
            unit, area, velocity, altitude, weight, cl, cd,
        )))
    }

    fn read_positive(
        &mut self,
        parameter: Parameter,
        unit: UnitSystem,
    ) -> anyhow::Result<Option<f64>> {
        let label = match parameter.unit_label(unit) {
            Some(unit_label) => format!("Enter {parameter} ({unit_label}): "),
            None => format!("Enter {parameter}: "),
        };
        const NOT_A_NUMBER: &str = "Invalid input. Enter a numeric value.";
        loop {
            let Some(raw) = self.prompt(&label)? else {
                return Ok(None);
            };
            let reply = match raw.parse::<f64>() {
                Ok(value) => match check_positive(parameter, value) {
                    Ok(value) => return Ok(Some(value)),
                    Err(ParameterError::NonPositive { .. }) => "Enter a number greater than 0.",
                    Err(ParameterError::NonFinite { .. }) => NOT_A_NUMBER,
                },
                Err(_) => NOT_A_NUMBER,
            };
            writeln!(self.out, "{reply}")?;
        }
    }

    /// Print `message` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> anyhow::Result<Option<String>> {
        write!(self.out, "{message}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
