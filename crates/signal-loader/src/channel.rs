//! Channel and Recording Types

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Sensor position a channel was recorded at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelKind {
    /// Drive-end accelerometer
    DriveEnd,
    /// Fan-end accelerometer
    FanEnd,
}

impl ChannelKind {
    /// All kinds, in the order their channels are processed
    pub const ALL: [ChannelKind; 2] = [ChannelKind::DriveEnd, ChannelKind::FanEnd];

    /// Short tag used in labels ("DE" / "FE")
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::DriveEnd => "DE",
            ChannelKind::FanEnd => "FE",
        }
    }

    /// Substring that marks a channel name as this kind
    pub fn name_marker(&self) -> &'static str {
        match self {
            ChannelKind::DriveEnd => "DE_time",
            ChannelKind::FanEnd => "FE_time",
        }
    }

    /// Classify a raw channel name, if it carries a known marker
    pub fn from_channel_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| name.contains(kind.name_marker()))
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sensor's time series
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    /// Name as stored in the recording (e.g. "X097_DE_time")
    pub name: String,
    /// Sensor position
    pub kind: ChannelKind,
    /// Samples at the recording's uniform sampling rate
    pub samples: Vec<f64>,
}

impl Channel {
    pub fn new(name: impl Into<String>, kind: ChannelKind, samples: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            kind,
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Channels read from one recording file
#[derive(Debug, Clone, Default)]
pub struct Recording {
    /// Identifier the labels are parsed from (the file name)
    pub identifier: String,
    /// Drive-end channels, in file order
    pub drive_end: Vec<Channel>,
    /// Fan-end channels, in file order
    pub fan_end: Vec<Channel>,
}

impl Recording {
    /// Create an empty recording
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Default::default()
        }
    }

    /// Build a recording from named arrays, keeping only DE/FE channels
    pub fn from_named<I>(identifier: impl Into<String>, named: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<f64>)>,
    {
        let mut recording = Self::new(identifier);
        for (name, samples) in named {
            match ChannelKind::from_channel_name(&name) {
                Some(kind) => recording.push(Channel::new(name, kind, samples)),
                None => debug!("Ignoring channel {} in {}", name, recording.identifier),
            }
        }
        recording
    }

    /// Add a channel to the collection matching its kind
    pub fn push(&mut self, channel: Channel) {
        match channel.kind {
            ChannelKind::DriveEnd => self.drive_end.push(channel),
            ChannelKind::FanEnd => self.fan_end.push(channel),
        }
    }

    /// Channels of one kind
    pub fn channels(&self, kind: ChannelKind) -> &[Channel] {
        match kind {
            ChannelKind::DriveEnd => &self.drive_end,
            ChannelKind::FanEnd => &self.fan_end,
        }
    }

    /// Total number of channels
    pub fn channel_count(&self) -> usize {
        self.drive_end.len() + self.fan_end.len()
    }
}

/// Check whether a channel name is one the loaders should read
pub(crate) fn is_signal_channel(name: &str) -> bool {
    ChannelKind::from_channel_name(name).is_some()
}
