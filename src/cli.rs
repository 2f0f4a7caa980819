use std::path::PathBuf;

use clap::Parser;

/// Assigns cargo orders to scheduled flights.
///
/// Directives can be combined; within one run the flight is added first, then
/// the schedule is shown, then orders are resolved.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "freight-scheduler", version, about)]
pub struct Cli {
    /// Print every scheduled flight.
    #[arg(long = "display-schedule", visible_alias = "displayschedule")]
    pub display_schedule: bool,

    /// Add the next flight (number, day and slot are computed) and save the schedule.
    #[arg(long = "add-flight", visible_alias = "loadschedule", requires_all = ["departure", "arrival"])]
    pub add_flight: bool,

    /// Departure location of the flight to add.
    #[arg(short = 'd', long, value_name = "LOCATION")]
    pub departure: Option<String>,

    /// Arrival location of the flight to add.
    #[arg(short = 'a', long, value_name = "LOCATION")]
    pub arrival: Option<String>,

    /// Resolve the orders in this JSON file against the schedule and print them.
    #[arg(long = "load-orders", visible_alias = "loadorders", value_name = "FILE")]
    pub load_orders: Option<PathBuf>,

    /// Schedule file to load and save.
    #[arg(long = "schedule-file", value_name = "FILE", default_value = crate::config::DEFAULT_SCHEDULE_FILE)]
    pub schedule_file: PathBuf,
}
