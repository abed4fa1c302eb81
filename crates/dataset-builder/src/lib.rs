//! Bearing Feature Dataset Builder
//!
//! Walks a directory of vibration recordings, segments every drive-end
//! and fan-end channel into frames and collects one labeled feature row
//! per frame.

mod builder;
pub mod cli;
mod config;
mod dataset;
mod error;
mod labels;

pub use builder::{add_recording, build_dataset, DatasetBuilder};
pub use crate::config::{BuildConfig, ENV_PREFIX};
pub use dataset::{Dataset, DatasetRow, LABEL_COLUMNS};
pub use error::BuildError;
pub use labels::{Label, UNKNOWN};

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging on stderr, leaving stdout for table output
pub fn init_logging(verbose: bool) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
