use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use flight_calculator::config::{PresetCatalog, load_catalog};
use flight_calculator::export;
use flight_calculator::{AircraftParameters, FlightReport, UnitSystem, compute_report};
use tracing::{Level, info};

#[path = "flight_calc/interactive.rs"]
mod interactive;

/// Compute lift, drag, and stall speed for an aircraft and judge whether it can fly.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Aircraft flight calculator (lift, drag, stall speed)"
)]
struct Cli {
    /// Preset catalog to use instead of the built-in aircraft (YAML list, TOML file, or directory of TOML files)
    #[arg(long, global = true, env = "FLIGHT_CALC_CATALOG")]
    catalog: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the aircraft in the preset catalog
    Presets,
    /// Compute the report for a named preset (case-sensitive)
    Preset { name: String },
    /// Compute the report for custom measurements
    Custom(CustomArgs),
    /// Prompt for an aircraft and measurements (default)
    Interactive,
}

#[derive(Args)]
struct CustomArgs {
    /// Unit system of the measurements
    #[arg(long, value_enum, default_value_t = Units::Si)]
    units: Units,

    /// Wing area (m² or ft²)
    #[arg(long)]
    wing_area: f64,

    /// Velocity (m/s or knots)
    #[arg(long)]
    velocity: f64,

    /// Altitude (m or ft)
    #[arg(long)]
    altitude: f64,

    /// Weight (N or lb)
    #[arg(long)]
    weight: f64,

    /// Lift coefficient (Cl)
    #[arg(long)]
    cl: f64,

    /// Drag coefficient (Cd)
    #[arg(long)]
    cd: f64,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Units {
    Si,
    Imperial,
}

impl From<Units> for UnitSystem {
    fn from(value: Units) -> Self {
        match value {
            Units::Si => UnitSystem::Si,
            Units::Imperial => UnitSystem::Imperial,
        }
    }
}

#[derive(Copy, Clone, ValueEnum, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)
            .with_context(|| format!("failed to load preset catalog {}", path.display()))?,
        None => PresetCatalog::builtin(),
    };
    info!(presets = catalog.len(), "preset catalog ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Presets => list_presets(&mut out, &catalog, cli.format)?,
        Command::Preset { name } => {
            let params = catalog.lookup(&name)?;
            let report = compute_report(&params)?;
            render(&mut out, cli.format, Some(&name), &report)?;
        }
        Command::Custom(args) => {
            let params = AircraftParameters::from_units(
                args.units.into(),
                args.wing_area,
                args.velocity,
                args.altitude,
                args.weight,
                args.cl,
                args.cd,
            )?;
            let report = compute_report(&params)?;
            render(&mut out, cli.format, None, &report)?;
        }
        Command::Interactive => {
            let stdin = io::stdin();
            let mut session = interactive::Session::new(stdin.lock(), &mut out, cli.format);
            session.run(&catalog)?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let subscriber = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_ansi(false)
        .compact()
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to init logging. {err}");
    }
}

fn list_presets(
    out: &mut dyn Write,
    catalog: &PresetCatalog,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Available aircraft presets:")?;
            for name in catalog.names() {
                writeln!(out, " - {name}")?;
            }
        }
        OutputFormat::Json => {
            let names: Vec<&str> = catalog.names().collect();
            export::write_names_json(out, &names)?;
        }
    }
    Ok(())
}

pub(crate) fn render(
    out: &mut dyn Write,
    format: OutputFormat,
    aircraft: Option<&str>,
    report: &FlightReport,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => export::write_text(out, aircraft, report)?,
        OutputFormat::Json => export::write_json(out, aircraft, report)?,
    }
    Ok(())
}
