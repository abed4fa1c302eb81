//! JSON Recording Loader
//!
//! A recording is one object mapping variable names to values. Signal
//! channels hold numeric arrays, possibly nested as column vectors
//! (`[[0.1], [0.2]]`); they are squeezed to one dimension.

use crate::channel::{is_signal_channel, Recording};
use crate::loader::{has_extension, identifier_of, SignalLoader};
use crate::LoadError;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Loader for `.json` recordings
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonLoader;

/// A signal channel whose value is not a 1-D numeric array
#[derive(Debug, Clone, PartialEq, Error)]
#[error("channel {channel}: {reason}")]
pub struct MalformedChannel {
    pub channel: String,
    pub reason: String,
}

impl JsonLoader {
    /// Parse an already-read JSON object into a recording
    pub fn parse(
        identifier: &str,
        object: Map<String, Value>,
    ) -> Result<Recording, MalformedChannel> {
        let mut named = Vec::new();
        for (name, value) in object {
            if !is_signal_channel(&name) {
                continue;
            }
            let samples = match squeeze(&value) {
                Ok(samples) => samples,
                Err(reason) => return Err(MalformedChannel { channel: name, reason }),
            };
            named.push((name, samples));
        }
        Ok(Recording::from_named(identifier, named))
    }
}

impl SignalLoader for JsonLoader {
    fn recognizes(&self, path: &Path) -> bool {
        has_extension(path, "json")
    }

    fn load(&self, path: &Path) -> Result<Recording, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let value: Value =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Json {
                path: path.display().to_string(),
                source,
            })?;

        let object = match value {
            Value::Object(object) => object,
            _ => {
                return Err(LoadError::Malformed {
                    path: path.display().to_string(),
                    reason: "top level is not an object".to_string(),
                })
            }
        };

        Self::parse(&identifier_of(path), object).map_err(|err| LoadError::Malformed {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
    }
}

/// Flatten a nested numeric array whose shape has at most one axis longer than 1
fn squeeze(value: &Value) -> Result<Vec<f64>, String> {
    let mut samples = Vec::new();
    let mut shape = Vec::new();
    collect(value, 0, &mut shape, &mut samples)?;

    let long_axes = shape.iter().filter(|&&len| len > 1).count();
    if long_axes > 1 {
        return Err(format!("expected a 1-D array, got shape {:?}", shape));
    }
    Ok(samples)
}

fn collect(
    value: &Value,
    depth: usize,
    shape: &mut Vec<usize>,
    samples: &mut Vec<f64>,
) -> Result<(), String> {
    match value {
        Value::Number(number) => {
            let sample = number
                .as_f64()
                .ok_or_else(|| format!("{} is not representable as f64", number))?;
            samples.push(sample);
            Ok(())
        }
        Value::Array(items) => {
            match shape.get(depth) {
                Some(&len) if len != items.len() => {
                    return Err(format!(
                        "ragged array at depth {}: {} vs {} elements",
                        depth,
                        len,
                        items.len()
                    ))
                }
                Some(_) => {}
                None => shape.push(items.len()),
            }
            for item in items {
                collect(item, depth + 1, shape, samples)?;
            }
            Ok(())
        }
        other => Err(format!("non-numeric value {}", other)),
    }
}
