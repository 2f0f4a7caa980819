use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Error, Result};

pub const DEFAULT_SCHEDULE_FILE: &str = "schedule.json";

/// A flight requested on the command line, validated but not yet numbered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFlight {
    pub departure: String,
    pub arrival: String,
}

/// Everything one run needs, resolved from the command line before any file is
/// touched. Paths are relative to the working directory unless absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub schedule_path: PathBuf,
    pub orders_path: Option<PathBuf>,
    pub new_flight: Option<NewFlight>,
    pub display_schedule: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if !cli.display_schedule && !cli.add_flight && cli.load_orders.is_none() {
            return Err(Error::InvalidInput(
                "no directive given; use --display-schedule, --add-flight or --load-orders".to_string(),
            ));
        }

        let new_flight = if cli.add_flight {
            Some(NewFlight {
                departure: required_location(cli.departure.as_deref(), "departure")?,
                arrival: required_location(cli.arrival.as_deref(), "arrival")?,
            })
        } else {
            if cli.departure.is_some() || cli.arrival.is_some() {
                log::warn!("--departure/--arrival given without --add-flight; ignoring them.");
            }
            None
        };

        Ok(Config {
            schedule_path: cli.schedule_file.clone(),
            orders_path: cli.load_orders.clone(),
            new_flight,
            display_schedule: cli.display_schedule,
        })
    }
}

fn required_location(value: Option<&str>, name: &str) -> Result<String> {
    match value.map(str::trim) {
        Some(location) if !location.is_empty() => Ok(location.to_string()),
        _ => Err(Error::InvalidInput(format!("--add-flight requires a non-empty {}", name))),
    }
}
