use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File not found: '{}'", .0.display())]
    FileNotFound(PathBuf),

    #[error("Cannot load file '{}': {reason}", .path.display())]
    FileUnreadable { path: PathBuf, reason: String },

    #[error("Invalid flight number {0}: flight numbers start at 1")]
    InvalidFlightNumber(i64),

    #[error("Flight counter is at its limit ({0}); no more flights can be added")]
    CounterExhausted(u32),

    #[error("Persisted schedule is inconsistent: {0}")]
    CorruptSchedule(String),

    #[error("File could not be read or written: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse schedule JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
