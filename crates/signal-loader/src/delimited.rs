//! CSV Recording Loader
//!
//! Header row holds channel names, each following row one sample per
//! channel. Shorter channels end at their first empty cell.

use crate::channel::{is_signal_channel, Recording};
use crate::loader::{has_extension, identifier_of, SignalLoader};
use crate::LoadError;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Loader for `.csv` recordings
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvLoader;

struct Column {
    index: usize,
    name: String,
    samples: Vec<f64>,
    ended: bool,
}

impl CsvLoader {
    /// Read a recording from any CSV source
    pub fn read<R: Read>(identifier: &str, source: R) -> Result<Recording, CsvReadError> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);

        let mut columns: Vec<Column> = reader
            .headers()?
            .iter()
            .enumerate()
            .filter(|(_, name)| is_signal_channel(name.trim()))
            .map(|(index, name)| Column {
                index,
                name: name.trim().to_string(),
                samples: Vec::new(),
                ended: false,
            })
            .collect();

        for (row, record) in reader.records().enumerate() {
            let record = record?;
            for column in columns.iter_mut() {
                let cell = record.get(column.index).map(str::trim).unwrap_or("");
                if cell.is_empty() {
                    column.ended = true;
                    continue;
                }
                if column.ended {
                    return Err(CsvReadError::Malformed(format!(
                        "channel {} has a gap before row {}",
                        column.name,
                        row + 1
                    )));
                }
                let sample = cell.parse::<f64>().map_err(|_| {
                    CsvReadError::Malformed(format!(
                        "channel {} row {}: {:?} is not a number",
                        column.name,
                        row + 1,
                        cell
                    ))
                })?;
                column.samples.push(sample);
            }
        }

        Ok(Recording::from_named(
            identifier,
            columns.into_iter().map(|column| (column.name, column.samples)),
        ))
    }
}

/// Failure inside [`CsvLoader::read`], before a path is attached
#[derive(Debug, Error)]
pub enum CsvReadError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Malformed(String),
}

impl SignalLoader for CsvLoader {
    fn recognizes(&self, path: &Path) -> bool {
        has_extension(path, "csv")
    }

    fn load(&self, path: &Path) -> Result<Recording, LoadError> {
        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::read(&identifier_of(path), file).map_err(|err| match err {
            CsvReadError::Csv(source) => LoadError::Csv {
                path: path.display().to_string(),
                source,
            },
            CsvReadError::Malformed(reason) => LoadError::Malformed {
                path: path.display().to_string(),
                reason,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_columns() {
        let data = "X097_DE_time,X097_FE_time,RPM\n0.1,1.1,1797\n0.2,1.2,\n0.3,1.3,\n";
        let recording = CsvLoader::read("Normal_0.csv", data.as_bytes()).unwrap();

        assert_eq!(recording.identifier, "Normal_0.csv");
        assert_eq!(recording.drive_end[0].samples, vec![0.1, 0.2, 0.3]);
        assert_eq!(recording.fan_end[0].samples, vec![1.1, 1.2, 1.3]);
    }

    #[test]
    fn test_shorter_channel_ends_at_empty_cell() {
        let data = "X1_DE_time,X1_FE_time\n1,2\n3,\n5,\n";
        let recording = CsvLoader::read("a.csv", data.as_bytes()).unwrap();
        assert_eq!(recording.drive_end[0].samples, vec![1.0, 3.0, 5.0]);
        assert_eq!(recording.fan_end[0].samples, vec![2.0]);
    }

    #[test]
    fn test_gap_is_malformed() {
        let data = "X1_DE_time,X1_FE_time\n1,1\n,2\n3,3\n";
        assert!(matches!(
            CsvLoader::read("a.csv", data.as_bytes()),
            Err(CsvReadError::Malformed(_))
        ));
    }

    #[test]
    fn test_read_error_is_std_error() {
        let data = "X1_DE_time,X1_FE_time\n1,1\n,2\n3,3\n";
        let err: Box<dyn std::error::Error> =
            CsvLoader::read("a.csv", data.as_bytes()).unwrap_err().into();
        assert_eq!(err.to_string(), "channel X1_DE_time has a gap before row 3");

        let ragged = "X1_DE_time,X1_FE_time\n1,2,3\n";
        let err = CsvLoader::read("a.csv", ragged.as_bytes()).unwrap_err();
        assert!(matches!(err, CsvReadError::Csv(_)));
        assert!(err.to_string().starts_with("CSV error:"));
    }

    #[test]
    fn test_non_numeric_cell() {
        let data = "X1_DE_time\n1\nabc\n";
        assert!(matches!(
            CsvLoader::read("a.csv", data.as_bytes()),
            Err(CsvReadError::Malformed(_))
        ));
    }
}
