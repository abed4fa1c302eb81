//! Time-Domain Statistics
//!
//! All moments are taken on raw amplitudes. Skewness and kurtosis are
//! normalized by `(N - 1)` and the sample standard deviation, and the
//! kurtosis is not offset by 3. Degenerate frames (constant amplitude)
//! yield NaN or infinite values rather than errors.

use serde::{Deserialize, Serialize};

/// Time-domain features for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeDomainFeatures {
    /// Mean value
    pub mean: f64,
    /// Sample standard deviation (ddof = 1)
    pub std_dev: f64,
    /// Mean absolute deviation from the mean
    pub mean_abs_deviation: f64,
    /// Root mean square
    pub rms: f64,
    /// Maximum absolute value
    pub max_abs: f64,
    /// Skewness (asymmetry)
    pub skewness: f64,
    /// Kurtosis (tailedness, not excess)
    pub kurtosis: f64,
    /// Peak over RMS
    pub crest_factor: f64,
    /// Peak over mean absolute deviation
    pub form_factor: f64,
    /// RMS over mean absolute deviation
    pub shape_factor: f64,
    /// Squared RMS over mean absolute amplitude
    pub impulse_factor: f64,
}

impl TimeDomainFeatures {
    /// Number of time-domain features
    pub const COUNT: usize = 11;

    /// Compute time-domain features from a frame
    pub fn compute(frame: &[f64]) -> Self {
        let n = frame.len() as f64;

        let mean = frame.iter().sum::<f64>() / n;

        let mut m2 = 0.0;
        let mut m3 = 0.0;
        let mut m4 = 0.0;
        let mut abs_dev = 0.0;
        let mut sum_sq = 0.0;
        let mut sum_abs = 0.0;
        let mut max_abs = 0.0_f64;

        for &v in frame {
            let d = v - mean;
            let d2 = d * d;
            m2 += d2;
            m3 += d2 * d;
            m4 += d2 * d2;
            abs_dev += d.abs();
            sum_sq += v * v;
            sum_abs += v.abs();
            max_abs = max_abs.max(v.abs());
        }

        let std_dev = (m2 / (n - 1.0)).sqrt();
        let mean_abs_deviation = abs_dev / n;
        let rms = (sum_sq / n).sqrt();
        let mean_abs = sum_abs / n;

        let skewness = m3 / ((n - 1.0) * std_dev.powi(3));
        let kurtosis = m4 / ((n - 1.0) * std_dev.powi(4));

        Self {
            mean,
            std_dev,
            mean_abs_deviation,
            rms,
            max_abs,
            skewness,
            kurtosis,
            crest_factor: max_abs / rms,
            form_factor: max_abs / mean_abs_deviation,
            shape_factor: rms / mean_abs_deviation,
            impulse_factor: rms * rms / mean_abs,
        }
    }

    /// Values in schema order
    pub fn to_array(&self) -> [f64; Self::COUNT] {
        [
            self.mean,
            self.std_dev,
            self.mean_abs_deviation,
            self.rms,
            self.max_abs,
            self.skewness,
            self.kurtosis,
            self.crest_factor,
            self.form_factor,
            self.shape_factor,
            self.impulse_factor,
        ]
    }
}
