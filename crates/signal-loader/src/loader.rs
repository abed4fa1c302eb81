//! Loader Trait and Extension Dispatch

use crate::channel::Recording;
use crate::delimited::CsvLoader;
use crate::json::JsonLoader;
use crate::LoadError;
use std::path::Path;
use tracing::debug;

/// Reads one recording file into DE/FE channels
pub trait SignalLoader {
    /// Whether this loader handles the given file
    fn recognizes(&self, path: &Path) -> bool;

    /// Read the file. Any failure is fatal for the file.
    fn load(&self, path: &Path) -> Result<Recording, LoadError>;
}

/// Recording identifier for a path: its file name
pub fn identifier_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub(crate) fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

/// Picks a format loader by file extension
#[derive(Debug, Default, Clone)]
pub struct FileLoader {
    json: JsonLoader,
    csv: CsvLoader,
}

impl FileLoader {
    pub fn new() -> Self {
        Self::default()
    }

    fn select(&self, path: &Path) -> Option<&dyn SignalLoader> {
        if self.json.recognizes(path) {
            Some(&self.json)
        } else if self.csv.recognizes(path) {
            Some(&self.csv)
        } else {
            None
        }
    }
}

impl SignalLoader for FileLoader {
    fn recognizes(&self, path: &Path) -> bool {
        self.select(path).is_some()
    }

    fn load(&self, path: &Path) -> Result<Recording, LoadError> {
        let loader = self
            .select(path)
            .ok_or_else(|| LoadError::Unsupported(path.display().to_string()))?;
        let recording = loader.load(path)?;
        debug!(
            "Loaded {}: {} DE, {} FE channels",
            recording.identifier,
            recording.drive_end.len(),
            recording.fan_end.len()
        );
        Ok(recording)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_dispatch_by_extension() {
        let loader = FileLoader::new();
        assert!(loader.recognizes(Path::new("data/IR007_0.json")));
        assert!(loader.recognizes(Path::new("data/IR007_0.CSV")));
        assert!(!loader.recognizes(Path::new("data/IR007_0.mat")));
        assert!(!loader.recognizes(Path::new("data/README")));
    }

    #[test]
    fn test_unsupported_file() {
        let loader = FileLoader::new();
        let err = loader.load(Path::new("IR007_0.mat")).unwrap_err();
        assert!(matches!(err, LoadError::Unsupported(_)));
    }

    #[test]
    fn test_load_both_formats() {
        let dir = tempdir().unwrap();
        let json_path = dir.path().join("B007_0.json");
        let csv_path = dir.path().join("OR021_6.csv");
        fs::write(&json_path, r#"{"X118_DE_time": [0.1, 0.2]}"#).unwrap();
        fs::write(&csv_path, "X234_FE_time\n0.5\n0.6\n0.7\n").unwrap();

        let loader = FileLoader::new();
        let json = loader.load(&json_path).unwrap();
        let csv = loader.load(&csv_path).unwrap();

        assert_eq!(json.identifier, "B007_0.json");
        assert_eq!(json.drive_end[0].samples, vec![0.1, 0.2]);
        assert_eq!(csv.fan_end[0].samples, vec![0.5, 0.6, 0.7]);
    }

    #[test]
    fn test_identifier_is_file_name() {
        assert_eq!(identifier_of(Path::new("/tmp/x/Normal_1.json")), "Normal_1.json");
    }
}
