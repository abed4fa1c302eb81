//! Feature Engineering Engine
//!
//! Slices vibration channels into overlapping frames and computes
//! time-domain and frequency-domain descriptors for each frame.

mod error;
mod features;
mod fft;
mod segment;
mod statistics;

pub use error::FeatureError;
pub use features::{FeatureExtractor, FeatureType, FeatureVector, FEATURE_KEYS};
pub use fft::{frequency_centroid, FrequencyDomainFeatures, Spectrum, SpectrumAnalyzer};
pub use segment::{segment, FrameSpec, Frames, DEFAULT_FRAME_SIZE, DEFAULT_OVERLAP};
pub use statistics::TimeDomainFeatures;

/// Default sampling rate of the bearing recordings (Hz)
pub const DEFAULT_SAMPLING_RATE: f64 = 48_000.0;

/// Time-domain features of one frame
pub fn time_domain_features(frame: &[f64]) -> FeatureVector {
    FeatureVector::from_parts(
        FeatureType::Time,
        Some(TimeDomainFeatures::compute(frame)),
        None,
    )
}

/// Frequency-domain features of one frame
pub fn frequency_domain_features(frame: &[f64], sampling_rate: f64) -> FeatureVector {
    let spectrum = SpectrumAnalyzer::new(sampling_rate).one_sided(frame);
    FeatureVector::from_parts(
        FeatureType::Frequency,
        None,
        Some(FrequencyDomainFeatures::compute(&spectrum)),
    )
}
