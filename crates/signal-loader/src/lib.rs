//! Signal Loading
//!
//! Turns a recording file into named vibration channels, split into
//! drive-end and fan-end collections.

mod channel;
mod delimited;
mod json;
mod loader;

pub use channel::{Channel, ChannelKind, Recording};
pub use delimited::{CsvLoader, CsvReadError};
pub use json::{JsonLoader, MalformedChannel};
pub use loader::{identifier_of, FileLoader, SignalLoader};

use thiserror::Error;

/// Errors while reading a recording
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid CSV in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("Malformed recording {path}: {reason}")]
    Malformed { path: String, reason: String },
    #[error("No loader for {0}")]
    Unsupported(String),
}
