//! Feature Engine Error Types

use thiserror::Error;

/// Errors from segmentation setup
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// Frame size must be at least one sample
    #[error("Frame size must be greater than zero")]
    ZeroFrameSize,

    /// Overlap must lie in [0, 1)
    #[error("Overlap {0} is outside [0, 1)")]
    InvalidOverlap(f64),

    /// Frame size and overlap leave no forward step
    #[error("Frame size {frame_size} with overlap {overlap} gives a step of zero samples")]
    ZeroStep { frame_size: usize, overlap: f64 },
}
