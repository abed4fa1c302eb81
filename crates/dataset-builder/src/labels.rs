//! Recording Labels
//!
//! Health state and damage size come from the recording identifier:
//! `Normal...` is healthy with size 0, otherwise a leading run of
//! letters followed by digits (`IR007_1.json` -> `IR`, `007`).

use serde::{Deserialize, Serialize};
use signal_loader::ChannelKind;

/// Label value used when an identifier matches no pattern
pub const UNKNOWN: &str = "Unknown";

/// Class labels parsed from one recording identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    /// Fault location or "Normal" (e.g. "IR", "OR", "B")
    pub health_state: String,
    /// Fault diameter code, digits kept verbatim (e.g. "007")
    pub damage_size: String,
}

impl Label {
    /// Parse labels from a recording identifier
    pub fn parse(identifier: &str) -> Self {
        if identifier.contains("Normal") {
            return Self {
                health_state: "Normal".to_string(),
                damage_size: "0".to_string(),
            };
        }

        match split_letters_digits(identifier) {
            Some((letters, digits)) => Self {
                health_state: letters.to_string(),
                damage_size: digits.to_string(),
            },
            None => Self::unknown(),
        }
    }

    pub fn unknown() -> Self {
        Self {
            health_state: UNKNOWN.to_string(),
            damage_size: UNKNOWN.to_string(),
        }
    }

    /// Health state + damage size + channel tag (e.g. "IR007DE")
    pub fn specific(&self, kind: ChannelKind) -> String {
        format!("{}{}{}", self.health_state, self.damage_size, kind.as_str())
    }
}

/// Leading ASCII letters then digits, both non-empty
fn split_letters_digits(identifier: &str) -> Option<(&str, &str)> {
    let letters_end = identifier
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(identifier.len());
    if letters_end == 0 {
        return None;
    }

    let rest = &identifier[letters_end..];
    let digits_len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_len == 0 {
        return None;
    }

    Some((&identifier[..letters_end], &rest[..digits_len]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(identifier: &str) -> (String, String) {
        let label = Label::parse(identifier);
        (label.health_state, label.damage_size)
    }

    #[test]
    fn test_normal() {
        assert_eq!(parsed("Normal"), ("Normal".into(), "0".into()));
        assert_eq!(parsed("Normal_3.json"), ("Normal".into(), "0".into()));
        assert_eq!(parsed("97_Normal_0.csv"), ("Normal".into(), "0".into()));
    }

    #[test]
    fn test_fault_codes() {
        assert_eq!(parsed("IR007"), ("IR".into(), "007".into()));
        assert_eq!(parsed("IR007_0.json"), ("IR".into(), "007".into()));
        assert_eq!(parsed("B021_2.csv"), ("B".into(), "021".into()));
        assert_eq!(parsed("OR014@6_1.json"), ("OR".into(), "014".into()));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(parsed("XYZ"), ("Unknown".into(), "Unknown".into()));
        assert_eq!(parsed("123IR.json"), ("Unknown".into(), "Unknown".into()));
        assert_eq!(parsed("IR_007.json"), ("Unknown".into(), "Unknown".into()));
        assert_eq!(parsed(""), ("Unknown".into(), "Unknown".into()));
    }

    #[test]
    fn test_parse_is_pure() {
        assert_eq!(Label::parse("OR021_3.json"), Label::parse("OR021_3.json"));
    }

    #[test]
    fn test_specific_label() {
        assert_eq!(Label::parse("Normal_0").specific(ChannelKind::DriveEnd), "Normal0DE");
        assert_eq!(Label::parse("IR007_1").specific(ChannelKind::FanEnd), "IR007FE");
        assert_eq!(Label::parse("XYZ").specific(ChannelKind::DriveEnd), "UnknownUnknownDE");
    }
}
