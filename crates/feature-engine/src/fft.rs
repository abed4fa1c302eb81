//! FFT-based Frequency Analysis
//!
//! Spectral features are computed on the one-sided normalized amplitude
//! spectrum `|FFT(x) / L|`, keeping the first `L / 2` bins and doubling
//! every bin except the first and the last kept one.

use rustfft::{num_complex::Complex, FftPlanner};
use serde::{Deserialize, Serialize};

/// One-sided amplitude spectrum with its bin frequencies
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Spectrum {
    /// Amplitude per bin
    pub amplitudes: Vec<f64>,
    /// Bin center frequencies (Hz)
    pub frequencies: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }
}

/// FFT analyzer that reuses plans across frames of the same length
pub struct SpectrumAnalyzer {
    /// FFT planner for efficient computation
    planner: FftPlanner<f64>,
    /// Sampling frequency (Hz)
    sample_rate: f64,
}

impl SpectrumAnalyzer {
    /// Create a new analyzer
    pub fn new(sample_rate: f64) -> Self {
        Self {
            planner: FftPlanner::new(),
            sample_rate,
        }
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Compute the one-sided spectrum of a frame
    pub fn one_sided(&mut self, frame: &[f64]) -> Spectrum {
        let n = frame.len();
        if n == 0 {
            return Spectrum::default();
        }

        let mut buffer: Vec<Complex<f64>> = frame.iter().map(|&v| Complex::new(v, 0.0)).collect();
        let fft = self.planner.plan_fft_forward(n);
        fft.process(&mut buffer);

        let half = n / 2;
        let length = n as f64;
        let mut amplitudes: Vec<f64> = buffer
            .iter()
            .take(half)
            .map(|c| (*c / length).norm())
            .collect();

        // Symmetry compensation, first and last kept bins excluded
        if half > 2 {
            for amplitude in &mut amplitudes[1..half - 1] {
                *amplitude *= 2.0;
            }
        }

        let resolution = self.sample_rate / length;
        let frequencies = (0..half).map(|k| k as f64 * resolution).collect();

        Spectrum {
            amplitudes,
            frequencies,
        }
    }
}

/// Frequency-domain features for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrequencyDomainFeatures {
    /// Mean of the spectrum
    pub spectrum_mean: f64,
    /// Sample standard deviation of the spectrum (ddof = 1)
    pub spectrum_std_dev: f64,
    /// Skewness of the spectrum
    pub spectrum_skewness: f64,
    /// Excess kurtosis of the spectrum
    pub spectrum_kurtosis: f64,
    /// Amplitude-weighted mean frequency
    pub mean_frequency: f64,
    /// Spread of frequency around the mean frequency
    pub frequency_std_dev: f64,
    /// Root mean square frequency
    pub rms_frequency: f64,
    /// Root variance frequency
    pub root_variance_frequency: f64,
    /// See [`frequency_centroid`]
    pub frequency_centroid: f64,
    /// Spread over mean frequency
    pub variation_factor: f64,
    /// Frequency-weighted third moment of the spectrum
    pub frequency_variance: f64,
    /// Frequency-weighted fourth moment of the spectrum
    pub frequency_skewness: f64,
}

impl FrequencyDomainFeatures {
    /// Number of frequency-domain features
    pub const COUNT: usize = 12;

    /// Compute features from a one-sided spectrum
    pub fn compute(spectrum: &Spectrum) -> Self {
        let ps = &spectrum.amplitudes;
        let freqs = &spectrum.frequencies;
        let k = ps.len() as f64;

        let mean = ps.iter().sum::<f64>() / k;

        let mut m2 = 0.0;
        let mut m3 = 0.0;
        let mut m4 = 0.0;
        let mut total = 0.0;
        let mut weighted = 0.0;
        let mut weighted_f2 = 0.0;
        let mut weighted_f4 = 0.0;
        for (&p, &f) in ps.iter().zip(freqs) {
            let d = p - mean;
            let d2 = d * d;
            m2 += d2;
            m3 += d2 * d;
            m4 += d2 * d2;
            total += p;
            weighted += p * f;
            weighted_f2 += f * f * p;
            weighted_f4 += f.powi(4) * p;
        }

        let std_dev = (m2 / (k - 1.0)).sqrt();
        let skewness = m3 / (k * std_dev.powi(3));
        let kurtosis = m4 / (k * std_dev.powi(4)) - 3.0;

        let mean_frequency = weighted / total;
        let spread_sum: f64 = ps
            .iter()
            .zip(freqs)
            .map(|(&p, &f)| (f - mean_frequency).powi(2) * p)
            .sum();
        let frequency_std_dev = (spread_sum / k).sqrt();

        let rms_frequency = (weighted_f2 / total).sqrt();
        let root_variance_frequency = (weighted_f4 / weighted_f2).sqrt();
        let centroid = frequency_centroid(weighted, total, frequency_std_dev);
        let variation_factor = if mean_frequency != 0.0 {
            frequency_std_dev / mean_frequency
        } else {
            0.0
        };

        let mut third = 0.0;
        let mut fourth = 0.0;
        for (&p, &f) in ps.iter().zip(freqs) {
            let d = p - mean;
            third += f * d.powi(3) * p;
            fourth += f * d.powi(4) * p;
        }
        let frequency_variance = third / (k * std_dev * frequency_std_dev);
        let frequency_skewness = fourth / (k * std_dev.powi(2) * frequency_std_dev);

        Self {
            spectrum_mean: mean,
            spectrum_std_dev: std_dev,
            spectrum_skewness: skewness,
            spectrum_kurtosis: kurtosis,
            mean_frequency,
            frequency_std_dev,
            rms_frequency,
            root_variance_frequency,
            frequency_centroid: centroid,
            variation_factor,
            frequency_variance,
            frequency_skewness,
        }
    }

    /// Values in schema order
    pub fn to_array(&self) -> [f64; Self::COUNT] {
        [
            self.spectrum_mean,
            self.spectrum_std_dev,
            self.spectrum_skewness,
            self.spectrum_kurtosis,
            self.mean_frequency,
            self.frequency_std_dev,
            self.rms_frequency,
            self.root_variance_frequency,
            self.frequency_centroid,
            self.variation_factor,
            self.frequency_variance,
            self.frequency_skewness,
        ]
    }
}

/// Frequency centroid as recorded in existing bearing datasets.
///
/// `sqrt((Σ ps·f − Σ ps · σ_f) / Σ ps)`, where `σ_f` is the frequency
/// spread. Mixing a spread into a centroid is dimensionally suspect;
/// kept so feature tables stay comparable. Fixing it only touches this
/// function.
pub fn frequency_centroid(weighted_sum: f64, total: f64, spread: f64) -> f64 {
    ((weighted_sum - total * spread) / total).sqrt()
}
