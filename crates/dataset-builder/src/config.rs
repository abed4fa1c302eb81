//! Build configuration
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! config file, then `BEARING_*` environment variables. The binary
//! applies its command-line flags on top.

use crate::BuildError;
use config::{Config, Environment, File};
use feature_engine::{
    FeatureError, FeatureType, FrameSpec, DEFAULT_FRAME_SIZE, DEFAULT_OVERLAP,
    DEFAULT_SAMPLING_RATE,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable prefix (`BEARING_FRAME_SIZE`, ...)
pub const ENV_PREFIX: &str = "BEARING";

/// Dataset build configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Samples per frame
    pub frame_size: usize,
    /// Fraction of a frame shared with the next one, in [0, 1)
    pub overlap: f64,
    /// Feature families to compute
    pub feature_type: FeatureType,
    /// Sampling rate of the recordings (Hz)
    pub sampling_rate: f64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            frame_size: DEFAULT_FRAME_SIZE,
            overlap: DEFAULT_OVERLAP,
            feature_type: FeatureType::Both,
            sampling_rate: DEFAULT_SAMPLING_RATE,
        }
    }
}

impl BuildConfig {
    /// Load from an optional file plus the environment
    pub fn load(path: Option<&Path>) -> Result<Self, BuildError> {
        Self::from_sources(path, Some(environment()))
    }

    /// Load from a file only, ignoring the environment
    pub fn from_file(path: &Path) -> Result<Self, BuildError> {
        Self::from_sources(Some(path), None)
    }

    fn from_sources(path: Option<&Path>, env: Option<Environment>) -> Result<Self, BuildError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            debug!("Reading configuration from {}", path.display());
            builder = builder.add_source(File::from(path));
        }
        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        let config: BuildConfig = builder.build()?.try_deserialize()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Check the frame parameters
    pub fn frame_spec(&self) -> Result<FrameSpec, FeatureError> {
        FrameSpec::new(self.frame_size, self.overlap)
    }

    /// Reject unusable settings before any file is read
    pub fn validate(&self) -> Result<FrameSpec, BuildError> {
        if !(self.sampling_rate.is_finite() && self.sampling_rate > 0.0) {
            return Err(BuildError::InvalidSamplingRate(self.sampling_rate));
        }
        Ok(self.frame_spec()?)
    }
}

/// `BEARING_*` variables, parsed as numbers where they look like one
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn fake_env(vars: &[(&str, &str)]) -> Environment {
        let vars: config::Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        environment().source(Some(vars))
    }

    #[test]
    fn test_defaults() {
        let config = BuildConfig::default();
        assert_eq!(config.frame_size, 2048);
        assert_eq!(config.overlap, 0.5);
        assert_eq!(config.feature_type, FeatureType::Both);
        assert_eq!(config.sampling_rate, 48_000.0);
        assert_eq!(config.validate().unwrap().step(), 1024);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("build.toml");
        fs::write(&path, "frame_size = 1024\nfeature_type = \"time\"\n").unwrap();

        let config = BuildConfig::from_file(&path).unwrap();
        assert_eq!(config.frame_size, 1024);
        assert_eq!(config.feature_type, FeatureType::Time);
        assert_eq!(config.overlap, 0.5);
        assert_eq!(config.sampling_rate, 48_000.0);
    }

    #[test]
    fn test_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("build.json");
        fs::write(&path, r#"{"overlap": 0.75, "sampling_rate": 12000}"#).unwrap();

        let config = BuildConfig::from_file(&path).unwrap();
        assert_eq!(config.overlap, 0.75);
        assert_eq!(config.sampling_rate, 12_000.0);
        assert_eq!(config.validate().unwrap().step(), 512);
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("build.toml");
        fs::write(&path, "frame_size = 1024\noverlap = 0.25\n").unwrap();

        let env = fake_env(&[
            ("BEARING_FRAME_SIZE", "512"),
            ("BEARING_FEATURE_TYPE", "time"),
            ("OTHER_OVERLAP", "0.9"),
        ]);
        let config = BuildConfig::from_sources(Some(&path), Some(env)).unwrap();
        assert_eq!(config.frame_size, 512);
        assert_eq!(config.feature_type, FeatureType::Time);
        assert_eq!(config.overlap, 0.25);
        assert_eq!(config.sampling_rate, 48_000.0);

        let env = fake_env(&[("BEARING_OVERLAP", "0.75"), ("BEARING_SAMPLING_RATE", "12000")]);
        let config = BuildConfig::from_sources(None, Some(env)).unwrap();
        assert_eq!(config.overlap, 0.75);
        assert_eq!(config.sampling_rate, 12_000.0);
        assert_eq!(config.frame_size, 2048);
    }

    #[test]
    fn test_bad_feature_type_in_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("build.toml");
        fs::write(&path, "feature_type = \"wavelet\"\n").unwrap();
        assert!(matches!(
            BuildConfig::from_file(&path),
            Err(BuildError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        assert!(BuildConfig::from_file(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_invalid_sampling_rate() {
        for sampling_rate in [0.0, -48_000.0, f64::NAN, f64::INFINITY] {
            let config = BuildConfig {
                sampling_rate,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(BuildError::InvalidSamplingRate(_))
            ));
        }
    }

    #[test]
    fn test_invalid_overlap() {
        let config = BuildConfig {
            overlap: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BuildError::Feature(FeatureError::InvalidOverlap(_)))
        ));
    }
}
