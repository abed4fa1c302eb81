//! Feature Dataset Table
//!
//! One row per frame: four label columns followed by the feature columns
//! of the build's [`FeatureType`], always in schema order.

use crate::labels::Label;
use crate::BuildError;
use feature_engine::{FeatureType, FeatureVector};
use serde::{Deserialize, Serialize};
use signal_loader::ChannelKind;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Label columns, in front of every feature column
pub const LABEL_COLUMNS: [&str; 4] = ["Specific Label", "Health State", "Damage Size", "Signal Type"];

/// One frame's labels and feature values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    /// Health state + damage size + signal type
    pub specific_label: String,
    pub health_state: String,
    pub damage_size: String,
    pub signal_type: ChannelKind,
    /// Feature values in column order
    pub features: Vec<f64>,
}

impl DatasetRow {
    /// Label cells as written to the table
    pub fn label_cells(&self) -> [&str; 4] {
        [
            self.specific_label.as_str(),
            self.health_state.as_str(),
            self.damage_size.as_str(),
            self.signal_type.as_str(),
        ]
    }
}

/// Labeled feature table with a fixed column schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    feature_type: FeatureType,
    rows: Vec<DatasetRow>,
}

impl Dataset {
    /// Create an empty dataset for one feature selection
    pub fn new(feature_type: FeatureType) -> Self {
        Self {
            feature_type,
            rows: Vec::new(),
        }
    }

    pub fn feature_type(&self) -> FeatureType {
        self.feature_type
    }

    /// Feature column names, in order
    pub fn feature_names(&self) -> &'static [&'static str] {
        self.feature_type.keys()
    }

    /// All column names: labels then features
    pub fn columns(&self) -> Vec<&'static str> {
        LABEL_COLUMNS
            .iter()
            .chain(self.feature_names())
            .copied()
            .collect()
    }

    /// Append one frame's features under the given labels
    pub fn push(
        &mut self,
        label: &Label,
        kind: ChannelKind,
        features: FeatureVector,
    ) -> Result<(), BuildError> {
        let expected = self.feature_type.feature_count();
        if features.feature_type() != self.feature_type || features.len() != expected {
            return Err(BuildError::SchemaMismatch {
                expected,
                actual: features.len(),
            });
        }

        self.rows.push(DatasetRow {
            specific_label: label.specific(kind),
            health_state: label.health_state.clone(),
            damage_size: label.damage_size.clone(),
            signal_type: kind,
            features: features.into_values(),
        });
        Ok(())
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one feature column, top to bottom
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let index = self.feature_names().iter().position(|key| *key == name)?;
        Some(self.rows.iter().map(|row| row.features[index]).collect())
    }

    /// Row count per specific label
    pub fn label_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(row.specific_label.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Serialize as CSV with a header row
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), BuildError> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(self.columns())?;

        for row in &self.rows {
            let mut record: Vec<String> = row.label_cells().iter().map(|s| s.to_string()).collect();
            record.extend(row.features.iter().map(|value| value.to_string()));
            writer.write_record(&record)?;
        }

        writer.flush().map_err(|source| BuildError::Io {
            path: "<csv writer>".to_string(),
            source,
        })?;
        Ok(())
    }

    /// Write the CSV to a file
    pub fn save_csv(&self, path: &Path) -> Result<(), BuildError> {
        let file = File::create(path).map_err(|source| BuildError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.write_csv(file)?;
        info!("Wrote {} rows to {}", self.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feature_engine::{frequency_domain_features, time_domain_features};

    fn frame(offset: f64) -> Vec<f64> {
        (0..64).map(|i| (i as f64 * 0.3).sin() + offset).collect()
    }

    #[test]
    fn test_columns_per_type() {
        assert_eq!(Dataset::new(FeatureType::Time).columns().len(), 15);
        assert_eq!(Dataset::new(FeatureType::Frequency).columns().len(), 16);

        let columns = Dataset::new(FeatureType::Both).columns();
        assert_eq!(columns.len(), 27);
        assert_eq!(&columns[..4], &LABEL_COLUMNS);
        assert_eq!(columns[4], "Mean");
        assert_eq!(columns[26], "Frequency skewness");
    }

    #[test]
    fn test_push_rows() {
        let mut dataset = Dataset::new(FeatureType::Time);
        let label = Label::parse("IR007_0.json");
        dataset
            .push(&label, ChannelKind::DriveEnd, time_domain_features(&frame(0.0)))
            .unwrap();
        dataset
            .push(&label, ChannelKind::FanEnd, time_domain_features(&frame(1.0)))
            .unwrap();

        assert_eq!(dataset.len(), 2);
        let row = &dataset.rows()[1];
        assert_eq!(row.label_cells(), ["IR007FE", "IR", "007", "FE"]);
        assert_eq!(row.features.len(), 11);

        let means = dataset.column("Mean").unwrap();
        assert!((means[1] - means[0] - 1.0).abs() < 1e-9);
        assert!(dataset.column("Mean frequency").is_none());
    }

    #[test]
    fn test_push_rejects_other_schema() {
        let mut dataset = Dataset::new(FeatureType::Time);
        let err = dataset
            .push(
                &Label::unknown(),
                ChannelKind::DriveEnd,
                frequency_domain_features(&frame(0.0), 48_000.0),
            )
            .unwrap_err();
        assert!(matches!(err, BuildError::SchemaMismatch { expected: 11, actual: 12 }));
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_label_counts() {
        let mut dataset = Dataset::new(FeatureType::Time);
        let normal = Label::parse("Normal_0");
        let fault = Label::parse("B007_0");
        for _ in 0..3 {
            dataset
                .push(&normal, ChannelKind::DriveEnd, time_domain_features(&frame(0.0)))
                .unwrap();
        }
        dataset
            .push(&fault, ChannelKind::FanEnd, time_domain_features(&frame(0.0)))
            .unwrap();

        let counts = dataset.label_counts();
        assert_eq!(counts["Normal0DE"], 3);
        assert_eq!(counts["B007FE"], 1);
    }

    #[test]
    fn test_csv_output() {
        let mut dataset = Dataset::new(FeatureType::Time);
        dataset
            .push(
                &Label::parse("Normal_0"),
                ChannelKind::DriveEnd,
                time_domain_features(&[0.5; 8]),
            )
            .unwrap();

        let mut buffer = Vec::new();
        dataset.write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("Specific Label,Health State,Damage Size,Signal Type,Mean,"));
        let row: Vec<&str> = lines.next().unwrap().split(',').collect();
        assert_eq!(&row[..4], &["Normal0DE", "Normal", "0", "DE"]);
        assert_eq!(row[4], "0.5");
        assert_eq!(row[5], "0");
        assert_eq!(row[9], "NaN");
        assert_eq!(row[12], "inf");
        assert!(lines.next().is_none());
    }
}
