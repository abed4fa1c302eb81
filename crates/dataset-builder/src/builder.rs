//! Dataset Builder
//!
//! Directory -> recordings -> channels -> frames -> feature rows. Files
//! are processed in file-name order so repeated builds match exactly.

use crate::config::BuildConfig;
use crate::dataset::Dataset;
use crate::labels::Label;
use crate::BuildError;
use feature_engine::{FeatureExtractor, FrameSpec};
use signal_loader::{ChannelKind, FileLoader, Recording, SignalLoader};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Builds a labeled feature table from a directory of recordings
pub struct DatasetBuilder<L = FileLoader> {
    loader: L,
    config: BuildConfig,
}

impl DatasetBuilder<FileLoader> {
    /// Builder reading JSON and CSV recordings
    pub fn new(config: BuildConfig) -> Self {
        Self::with_loader(FileLoader::new(), config)
    }
}

impl<L: SignalLoader> DatasetBuilder<L> {
    /// Builder with a custom recording reader
    pub fn with_loader(loader: L, config: BuildConfig) -> Self {
        Self { loader, config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Recognized recording files in a directory, sorted by name
    pub fn recording_files(&self, directory: &Path) -> Result<Vec<PathBuf>, BuildError> {
        let io_error = |source| BuildError::Io {
            path: directory.display().to_string(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(directory).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_file() && self.loader.recognizes(&path) {
                files.push(path);
            } else {
                debug!("Skipping {}", path.display());
            }
        }
        files.sort();
        Ok(files)
    }

    /// Build the dataset for every recording in `directory`
    pub fn build(&self, directory: &Path) -> Result<Dataset, BuildError> {
        let spec = self.config.validate()?;
        let files = self.recording_files(directory)?;
        if files.is_empty() {
            return Err(BuildError::NoRecordings {
                directory: directory.display().to_string(),
            });
        }

        info!(
            "Building {} features from {} recordings in {} (frame_size={}, overlap={}, sampling_rate={})",
            self.config.feature_type,
            files.len(),
            directory.display(),
            spec.frame_size(),
            spec.overlap(),
            self.config.sampling_rate
        );

        let mut extractor = FeatureExtractor::new(self.config.feature_type, self.config.sampling_rate);
        let mut dataset = Dataset::new(self.config.feature_type);

        for path in &files {
            let recording = self.loader.load(path).map_err(|source| BuildError::Load {
                path: path.display().to_string(),
                source,
            })?;
            let before = dataset.len();
            add_recording(&recording, &spec, &mut extractor, &mut dataset)?;
            info!(
                "{}: {} rows from {} channels",
                recording.identifier,
                dataset.len() - before,
                recording.channel_count()
            );
        }

        info!("Dataset complete: {} rows", dataset.len());
        Ok(dataset)
    }
}

/// Append one row per frame of every DE then FE channel in a recording
pub fn add_recording(
    recording: &Recording,
    spec: &FrameSpec,
    extractor: &mut FeatureExtractor,
    dataset: &mut Dataset,
) -> Result<(), BuildError> {
    let label = Label::parse(&recording.identifier);
    if recording.channel_count() == 0 {
        warn!("{} has no DE/FE channels", recording.identifier);
    }

    for kind in ChannelKind::ALL {
        for channel in recording.channels(kind) {
            let frames = spec.frames(&channel.samples);
            debug!(
                "{} {}: {} samples -> {} frames",
                recording.identifier,
                channel.name,
                channel.len(),
                frames.len()
            );
            for frame in frames {
                dataset.push(&label, kind, extractor.extract(frame))?;
            }
        }
    }
    Ok(())
}

/// Build a dataset with the default loader
pub fn build_dataset(directory: &Path, config: &BuildConfig) -> Result<Dataset, BuildError> {
    DatasetBuilder::new(config.clone()).build(directory)
}
