//! Command line parsing
//!
//! Values for parts stay raw strings, exactly like form values, and are
//! parsed by the core library.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use mopedtune_core::tuning::Revision;

pub const USAGE: &str = "\
Usage: mopedtune [--revision classic|extended] [--data <file.json>] [--json] <command>

Commands:
  calc [--cylinder <stock|cc>] [--carb <n>] [--front <teeth>] [--rear <teeth>] [--exhaust <n>]
      Estimate top speed. Omitted parts use the standard part or stock gearing.
  defaults --cylinder <stock|cc>
      Show the standard carburetor and exhaust for a cylinder.
  options [--cylinder <stock|cc>]
      List cylinders and carburetor/exhaust options.
  dump-data
      Print the active tuning data as JSON.
  help
      Show this message.";

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
pub struct Cli {
    pub revision: Option<Revision>,
    pub data: Option<PathBuf>,
    pub json: bool,
    pub command: Command,
}

#[derive(Debug, Default, PartialEq)]
pub enum Command {
    Calc(PartArgs),
    Defaults { cylinder: String },
    Options { cylinder: Option<String> },
    DumpData,
    #[default]
    Help,
}

/// Raw part values as given on the command line
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PartArgs {
    pub cylinder: Option<String>,
    pub carb: Option<String>,
    pub front: Option<String>,
    pub rear: Option<String>,
    pub exhaust: Option<String>,
}

impl Cli {
    /// Parse arguments (without the program name)
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cli = Cli::default();
        let mut command: Option<String> = None;
        let mut parts = PartArgs::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .ok_or_else(|| anyhow!("Missing value for {}", flag))
            };

            match arg.as_str() {
                "--json" => cli.json = true,
                "--revision" => {
                    let raw = value("--revision")?;
                    cli.revision = Some(raw.parse::<Revision>().context("Invalid --revision")?);
                }
                "--data" => cli.data = Some(PathBuf::from(value("--data")?)),
                "--cylinder" => parts.cylinder = Some(value("--cylinder")?),
                "--carb" => parts.carb = Some(value("--carb")?),
                "--front" => parts.front = Some(value("--front")?),
                "--rear" => parts.rear = Some(value("--rear")?),
                "--exhaust" => parts.exhaust = Some(value("--exhaust")?),
                "-h" | "--help" => command = Some("help".to_string()),
                flag if flag.starts_with('-') => bail!("Unknown option '{}'\n\n{}", flag, USAGE),
                name => {
                    if let Some(existing) = &command {
                        bail!("Unexpected argument '{}' after command '{}'", name, existing);
                    }
                    command = Some(name.to_string());
                }
            }
        }

        cli.command = match command.as_deref() {
            Some("calc") => Command::Calc(parts),
            Some("defaults") => Command::Defaults {
                cylinder: parts
                    .cylinder
                    .ok_or_else(|| anyhow!("'defaults' needs --cylinder"))?,
            },
            Some("options") => Command::Options {
                cylinder: parts.cylinder,
            },
            Some("dump-data") => Command::DumpData,
            Some("help") | None => Command::Help,
            Some(other) => bail!("Unknown command '{}'\n\n{}", other, USAGE),
        };

        Ok(cli)
    }
}
