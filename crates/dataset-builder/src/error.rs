//! Dataset Builder Error Types

use feature_engine::FeatureError;
use signal_loader::LoadError;
use thiserror::Error;

/// Errors that abort a dataset build
#[derive(Debug, Error)]
pub enum BuildError {
    /// A recording could not be read; the build stops at the first one
    #[error("Failed to load recording {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: LoadError,
    },

    /// Frame parameters rejected before any file is read
    #[error("Invalid frame parameters: {0}")]
    Feature(#[from] FeatureError),

    /// Sampling rate must be finite and positive
    #[error("Invalid sampling rate: {0} Hz")]
    InvalidSamplingRate(f64),

    /// Directory has nothing the loader recognizes
    #[error("No recordings found in {directory}")]
    NoRecordings { directory: String },

    /// Directory listing or output file failure
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Feature vector does not match the dataset's columns
    #[error("Feature vector has {actual} values, dataset expects {expected}")]
    SchemaMismatch { expected: usize, actual: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
