use std::fmt;
use std::fs;

use chrono::Local;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record};

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "freight.log";

/// Writes `[timestamp level target] message`, with `level` rendered by the caller.
fn write_record(out: FormatCallback, message: &fmt::Arguments, record: &Record, level: impl fmt::Display) {
    out.finish(format_args!(
        "[{} {} {}] {}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        level,
        record.target(),
        message
    ))
}

/// Initializes the global logger. Call once, before the schedule is loaded.
///
/// The level comes from `RUST_LOG` (default `info`). Records go to stderr with
/// colored levels and, when the file can be opened, to `logs/freight.log`.
/// Stdout stays reserved for the schedule and order reports.
pub fn init() {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    let mut dispatch = Dispatch::new().level(level).level_for("serde", LevelFilter::Warn).chain(
        Dispatch::new()
            .format(move |out, message, record| write_record(out, message, record, colors.color(record.level())))
            .chain(std::io::stderr()),
    );

    let log_file_path = format!("{}/{}", LOG_DIR, LOG_FILE);
    let log_file = fs::create_dir_all(LOG_DIR).and_then(|_| fern::log_file(&log_file_path));
    match log_file {
        Ok(file) => {
            dispatch = dispatch.chain(
                Dispatch::new()
                    .format(|out, message, record| write_record(out, message, record, record.level()))
                    .chain(file),
            );
        }
        Err(e) => eprintln!("Logging to console only; cannot open '{}': {}", log_file_path, e),
    }

    if let Err(e) = dispatch.apply() {
        eprintln!("Failed to apply logger configuration: {}", e);
    }

    log::debug!("Logger initialized at level {}.", level);
}
