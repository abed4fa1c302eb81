//! Frame Segmentation
//!
//! Frames start at `0, step, 2*step, ...` and are kept only while they
//! fit entirely inside the channel. Trailing samples are dropped.

use crate::FeatureError;
use std::iter::StepBy;
use std::slice::Windows;

/// Default frame length (samples)
pub const DEFAULT_FRAME_SIZE: usize = 2048;

/// Default fraction of a frame shared with the next one
pub const DEFAULT_OVERLAP: f64 = 0.5;

/// Validated frame size and overlap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSpec {
    frame_size: usize,
    overlap: f64,
    step: usize,
}

impl FrameSpec {
    /// Validate the parameters and derive the step
    pub fn new(frame_size: usize, overlap: f64) -> Result<Self, FeatureError> {
        if frame_size == 0 {
            return Err(FeatureError::ZeroFrameSize);
        }
        if !overlap.is_finite() || !(0.0..1.0).contains(&overlap) {
            return Err(FeatureError::InvalidOverlap(overlap));
        }

        // Truncation matches floor for the non-negative product
        let step = (frame_size as f64 * (1.0 - overlap)) as usize;
        if step == 0 {
            return Err(FeatureError::ZeroStep {
                frame_size,
                overlap,
            });
        }

        Ok(Self {
            frame_size,
            overlap,
            step,
        })
    }

    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    pub fn overlap(&self) -> f64 {
        self.overlap
    }

    /// Distance between consecutive frame starts
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of frames a channel of `len` samples yields
    pub fn frame_count(&self, len: usize) -> usize {
        if len < self.frame_size {
            0
        } else {
            (len - self.frame_size) / self.step + 1
        }
    }

    /// Iterate the frames of a channel as borrowed views
    pub fn frames<'a>(&self, samples: &'a [f64]) -> Frames<'a> {
        Frames {
            inner: samples.windows(self.frame_size).step_by(self.step),
        }
    }
}

impl Default for FrameSpec {
    fn default() -> Self {
        Self {
            frame_size: DEFAULT_FRAME_SIZE,
            overlap: DEFAULT_OVERLAP,
            step: DEFAULT_FRAME_SIZE / 2,
        }
    }
}

/// Iterator over the frames of one channel
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    inner: StepBy<Windows<'a, f64>>,
}

impl<'a> Iterator for Frames<'a> {
    type Item = &'a [f64];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Frames<'_> {}

/// Slice a channel into overlapping fixed-length frames
pub fn segment(
    samples: &[f64],
    frame_size: usize,
    overlap: f64,
) -> Result<Vec<&[f64]>, FeatureError> {
    let spec = FrameSpec::new(frame_size, overlap)?;
    Ok(spec.frames(samples).collect())
}
