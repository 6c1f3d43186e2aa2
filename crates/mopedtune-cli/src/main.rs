//! MopedTune command line front end

mod args;
mod commands;
mod options;
mod output;

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use mopedtune_core::defaults::standard_indices;
use mopedtune_core::selection::CylinderChoice;
use mopedtune_core::tuning::TuningData;

use args::{Cli, Command, PartArgs, USAGE};
use commands::{calc_session, parse_cylinder, resolve_tuning_data, OptionLists};
use output::{render_result, CalcReport};

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse(env::args().skip(1))?;
    if cli.command == Command::Help {
        println!("{}", USAGE);
        return Ok(());
    }

    let user_file = default_data_path();
    let data = resolve_tuning_data(cli.data.as_deref(), cli.revision, user_file.as_deref())?;
    match &cli.command {
        Command::Calc(parts) => run_calc(data, parts, cli.json),
        Command::Defaults { cylinder } => run_defaults(&data, cylinder, cli.json),
        Command::Options { cylinder } => run_options(&data, cylinder.as_deref(), cli.json),
        Command::DumpData => {
            println!("{}", data.to_json()?);
            Ok(())
        }
        Command::Help => Ok(()),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to init logging. {}", e);
    }
}

/// User tuning file in the platform config directory
fn default_data_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mopedtune").join("tuning.json"))
}

fn run_calc(data: TuningData, parts: &PartArgs, json: bool) -> Result<()> {
    let session = calc_session(data, parts)?;

    if json {
        let report = CalcReport::new(session.selection(), session.result());
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_result(session.selection(), session.result()));
    }
    Ok(())
}

fn run_defaults(data: &TuningData, cylinder: &str, json: bool) -> Result<()> {
    let cylinder: CylinderChoice = cylinder.parse()?;
    let standard = standard_indices(data, cylinder);

    if json {
        println!("{}", serde_json::to_string_pretty(&standard)?);
        return Ok(());
    }

    println!("Zylinder {}", cylinder);
    println!("  Standard Auspuff:  {}", standard.exhaust);
    match standard.carb {
        Some(carb) => println!("  Standard Vergaser: {}", carb),
        None => println!("  Standard Vergaser: -"),
    }
    Ok(())
}

fn run_options(data: &TuningData, cylinder: Option<&str>, json: bool) -> Result<()> {
    let cylinder = parse_cylinder(data, cylinder)?;
    let lists = OptionLists::new(data, cylinder);

    if json {
        println!("{}", serde_json::to_string_pretty(&lists)?);
        return Ok(());
    }

    println!("Zylinder: {}", lists.cylinders.join(", "));
    println!("Vergaser:");
    for (i, label) in lists.carburetors.iter().enumerate() {
        println!("  {}: {}", i, label);
    }
    println!("Auspuff:");
    for (i, label) in lists.exhausts.iter().enumerate() {
        println!("  {}: {}", i, label);
    }
    Ok(())
}
