use clap::Parser;
use energy_core::{CONTOUR_LEVELS, ContourLevels, Field, Grid, ParameterText, Parameters, ValidationError, compute_field};
use serde::Serialize;
use std::io::{self, Write};

/// Evaluate U(x, y) = m·g·y + 0.5·k·(x² + y²) on the fixed 100x100 grid
/// over [-5, 5]² and print a JSON report.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Mass m (parsed like the viewer's input field)
    #[arg(long, default_value = energy_core::DEFAULT_MASS, allow_hyphen_values = true)]
    mass: String,

    /// Gravitational acceleration g
    #[arg(long, default_value = energy_core::DEFAULT_GRAVITY, allow_hyphen_values = true)]
    gravity: String,

    /// Spring constant k
    #[arg(long, default_value = energy_core::DEFAULT_SPRING, allow_hyphen_values = true)]
    spring: String,

    /// Include the row-major field values (index = iy * n + ix)
    #[arg(long)]
    with_field: bool,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    parameters: Parameters,

    n: usize,
    x_min: f64,
    x_max: f64,
    dx: f64,

    u_min: f64,
    u_max: f64,
    levels: &'a [f64],

    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a [f64]>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let grid = Grid::standard();
    let text = ParameterText::new(&args.mass, &args.gravity, &args.spring);
    let field = match compute_field(&grid, &text) {
        Ok(f) => f,
        Err(e) => {
            log::error!("rejected input: {e}");
            eprintln!("{}", input_error_message(&e));
            std::process::exit(1);
        }
    };

    let levels = ContourLevels::for_field(&field, CONTOUR_LEVELS);
    let report = build_report(&grid, &field, &levels, args.with_field);

    let mut out = io::stdout().lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &report)?;
    } else {
        serde_json::to_writer(&mut out, &report)?;
    }
    out.write_all(b"\n")?;
    out.flush()?;

    log::info!("wrote report for {} grid points", field.values().len());
    Ok(())
}

fn input_error_message(e: &ValidationError) -> String {
    format!("Error: Please enter valid numeric values for all parameters. {e}")
}

fn build_report<'a>(grid: &Grid, field: &'a Field, levels: &'a ContourLevels, with_field: bool) -> Report<'a> {
    Report {
        parameters: field.parameters(),
        n: grid.n(),
        x_min: grid.xs()[0],
        x_max: grid.xs()[grid.n() - 1],
        dx: grid.dx(),
        u_min: field.min(),
        u_max: field.max(),
        levels: levels.boundaries(),
        field: with_field.then(|| field.values()),
    }
}
