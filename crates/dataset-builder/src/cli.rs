//! Command-line interface for the dataset builder.

use crate::config::BuildConfig;
use clap::Parser;
use feature_engine::FeatureType;
use std::path::PathBuf;

/// Build a labeled bearing feature table from vibration recordings
#[derive(Parser, Debug)]
#[command(name = "bearing-dataset")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory of recordings (.json / .csv)
    pub directory: PathBuf,

    /// Output CSV file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (TOML, JSON or YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Samples per frame
    #[arg(long)]
    pub frame_size: Option<usize>,

    /// Fraction of each frame shared with the next, in [0, 1)
    #[arg(long)]
    pub overlap: Option<f64>,

    /// Feature families: time, frequency or both
    #[arg(long)]
    pub feature_type: Option<FeatureType>,

    /// Sampling rate of the recordings (Hz)
    #[arg(long)]
    pub sampling_rate: Option<f64>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Override loaded settings with flags given on the command line
    pub fn apply(&self, mut config: BuildConfig) -> BuildConfig {
        if let Some(frame_size) = self.frame_size {
            config.frame_size = frame_size;
        }
        if let Some(overlap) = self.overlap {
            config.overlap = overlap;
        }
        if let Some(feature_type) = self.feature_type {
            config.feature_type = feature_type;
        }
        if let Some(sampling_rate) = self.sampling_rate {
            config.sampling_rate = sampling_rate;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_args() {
        let cli = Cli::try_parse_from(["bearing-dataset", "data/48k_DE"]).unwrap();
        assert_eq!(cli.directory, PathBuf::from("data/48k_DE"));
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.apply(BuildConfig::default()), BuildConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "bearing-dataset",
            "data",
            "-o",
            "features.csv",
            "--frame-size",
            "1024",
            "--overlap",
            "0.25",
            "--feature-type",
            "frequency",
            "--sampling-rate",
            "12000",
            "-v",
        ])
        .unwrap();

        let config = cli.apply(BuildConfig::default());
        assert_eq!(cli.output, Some(PathBuf::from("features.csv")));
        assert!(cli.verbose);
        assert_eq!(config.frame_size, 1024);
        assert_eq!(config.overlap, 0.25);
        assert_eq!(config.feature_type, FeatureType::Frequency);
        assert_eq!(config.sampling_rate, 12_000.0);
    }

    #[test]
    fn test_rejects_unknown_feature_type() {
        assert!(Cli::try_parse_from(["bearing-dataset", "data", "--feature-type", "wavelet"]).is_err());
    }
}
