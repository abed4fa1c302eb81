//! Feature Vector Assembly
//!
//! The feature schema is a fixed ordered list of keys. Which part of it a
//! vector carries is selected by [`FeatureType`], so every vector built
//! with the same type has identical keys in identical order.

use crate::fft::{FrequencyDomainFeatures, SpectrumAnalyzer};
use crate::statistics::TimeDomainFeatures;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Every feature key, time domain first, in column order
pub const FEATURE_KEYS: [&str; 23] = [
    "Mean",
    "Standard deviation",
    "Mean absolute deviation",
    "Root mean square",
    "Maximum absolute value",
    "Skewness",
    "Kurtosis",
    "Crest factor",
    "Form factor",
    "Shape factor",
    "Impulse factor",
    "Mean of power spectrum",
    "Standard deviation of power spectrum",
    "Skewness of power spectrum",
    "Kurtosis of power spectrum",
    "Mean frequency",
    "Standard deviation of frequency",
    "Root mean square frequency",
    "Root variance frequency",
    "Frequency centroid",
    "Frequency variation factor",
    "Frequency variance",
    "Frequency skewness",
];

/// Which feature families to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureType {
    /// Time-domain statistics only
    Time,
    /// Frequency-domain statistics only
    Frequency,
    /// Both families
    #[default]
    Both,
}

impl FeatureType {
    pub fn includes_time(&self) -> bool {
        matches!(self, FeatureType::Time | FeatureType::Both)
    }

    pub fn includes_frequency(&self) -> bool {
        matches!(self, FeatureType::Frequency | FeatureType::Both)
    }

    /// Ordered keys produced for this type
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            FeatureType::Time => &FEATURE_KEYS[..TimeDomainFeatures::COUNT],
            FeatureType::Frequency => &FEATURE_KEYS[TimeDomainFeatures::COUNT..],
            FeatureType::Both => &FEATURE_KEYS,
        }
    }

    /// Number of features produced for this type
    pub fn feature_count(&self) -> usize {
        self.keys().len()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Time => "time",
            FeatureType::Frequency => "frequency",
            FeatureType::Both => "both",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "time" => Ok(FeatureType::Time),
            "frequency" => Ok(FeatureType::Frequency),
            "both" => Ok(FeatureType::Both),
            other => Err(format!(
                "unknown feature type '{}' (expected time, frequency or both)",
                other
            )),
        }
    }
}

/// Feature values of one frame, ordered as `feature_type.keys()`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    feature_type: FeatureType,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Assemble a vector from the computed families
    pub(crate) fn from_parts(
        feature_type: FeatureType,
        time: Option<TimeDomainFeatures>,
        frequency: Option<FrequencyDomainFeatures>,
    ) -> Self {
        let mut values = Vec::with_capacity(feature_type.feature_count());
        if let Some(time) = time {
            values.extend_from_slice(&time.to_array());
        }
        if let Some(frequency) = frequency {
            values.extend_from_slice(&frequency.to_array());
        }
        debug_assert_eq!(values.len(), feature_type.feature_count());
        Self {
            feature_type,
            values,
        }
    }

    pub fn feature_type(&self) -> FeatureType {
        self.feature_type
    }

    /// Keys in order
    pub fn keys(&self) -> &'static [&'static str] {
        self.feature_type.keys()
    }

    /// Values in key order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Look up a feature by key
    pub fn get(&self, key: &str) -> Option<f64> {
        self.keys()
            .iter()
            .position(|k| *k == key)
            .map(|index| self.values[index])
    }

    /// (key, value) pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.keys().iter().copied().zip(self.values.iter().copied())
    }
}

/// Computes the selected feature families for successive frames
pub struct FeatureExtractor {
    /// FFT analyzer
    analyzer: SpectrumAnalyzer,
    /// Families to compute
    feature_type: FeatureType,
}

impl FeatureExtractor {
    /// Create a new feature extractor
    pub fn new(feature_type: FeatureType, sample_rate: f64) -> Self {
        debug!(
            "Creating feature extractor: type={}, sample_rate={}",
            feature_type, sample_rate
        );
        Self {
            analyzer: SpectrumAnalyzer::new(sample_rate),
            feature_type,
        }
    }

    pub fn feature_type(&self) -> FeatureType {
        self.feature_type
    }

    pub fn sample_rate(&self) -> f64 {
        self.analyzer.sample_rate()
    }

    /// Extract features from one frame
    pub fn extract(&mut self, frame: &[f64]) -> FeatureVector {
        let time = self
            .feature_type
            .includes_time()
            .then(|| TimeDomainFeatures::compute(frame));
        let frequency = if self.feature_type.includes_frequency() {
            let spectrum = self.analyzer.one_sided(frame);
            Some(FrequencyDomainFeatures::compute(&spectrum))
        } else {
            None
        };
        FeatureVector::from_parts(self.feature_type, time, frequency)
    }
}
