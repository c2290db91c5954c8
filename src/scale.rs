//! Response scales
//!
//! The questionnaire uses two ordinal ranges: a four-point intensity scale
//! for items 1-28 and a seven-point global rating for items 29-30.

use crate::error::{VoiceError, VoiceResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Labels read back to the user on the four-point scale
const FOUR_POINT_OPTIONS: &[&str] = &["Pas du tout", "Un peu", "Assez", "Beaucoup"];

/// Labels read back to the user on the seven-point scale
const SEVEN_POINT_OPTIONS: &[&str] = &["Un", "Deux", "Trois", "Quatre", "Cinq", "Six", "Sept"];

/// An ordinal response scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scale {
    /// Scores 1..=4
    #[serde(rename = "1-4")]
    FourPoint,
    /// Scores 1..=7
    #[serde(rename = "1-7")]
    SevenPoint,
}

impl Scale {
    /// Parse a scale identifier as stored alongside each question
    pub fn from_id(id: &str) -> VoiceResult<Self> {
        match id.trim() {
            "1-4" => Ok(Scale::FourPoint),
            "1-7" => Ok(Scale::SevenPoint),
            other => Err(VoiceError::InvalidScale(other.to_string())),
        }
    }

    /// Identifier used on the wire and in config files
    pub fn id(self) -> &'static str {
        match self {
            Scale::FourPoint => "1-4",
            Scale::SevenPoint => "1-7",
        }
    }

    /// Highest valid score
    pub fn max(self) -> u8 {
        match self {
            Scale::FourPoint => 4,
            Scale::SevenPoint => 7,
        }
    }

    pub fn range(self) -> RangeInclusive<u32> {
        1..=u32::from(self.max())
    }

    /// Whether `value` is a valid score on this scale (never clamped)
    pub fn contains(self, value: u32) -> bool {
        self.range().contains(&value)
    }

    /// Enumerated textual options, in score order
    pub fn options(self) -> &'static [&'static str] {
        match self {
            Scale::FourPoint => FOUR_POINT_OPTIONS,
            Scale::SevenPoint => SEVEN_POINT_OPTIONS,
        }
    }

    /// Option label for a score, if the score is on the scale
    pub fn label(self, score: u8) -> Option<&'static str> {
        if score == 0 {
            return None;
        }
        self.options().get(usize::from(score) - 1).copied()
    }
}

impl FromStr for Scale {
    type Err = VoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scale::from_id(s)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(Scale::from_id("1-4").unwrap(), Scale::FourPoint);
        assert_eq!(Scale::from_id(" 1-7 ").unwrap(), Scale::SevenPoint);
        assert!(matches!(
            Scale::from_id("1-5"),
            Err(VoiceError::InvalidScale(id)) if id == "1-5"
        ));
        assert!("".parse::<Scale>().is_err());
    }

    #[test]
    fn test_range_is_not_clamped() {
        assert!(Scale::SevenPoint.contains(7));
        assert!(!Scale::SevenPoint.contains(8));
        assert!(!Scale::FourPoint.contains(0));
        assert!(!Scale::FourPoint.contains(5));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Scale::FourPoint.label(1), Some("Pas du tout"));
        assert_eq!(Scale::FourPoint.label(4), Some("Beaucoup"));
        assert_eq!(Scale::FourPoint.label(5), None);
        assert_eq!(Scale::SevenPoint.label(7), Some("Sept"));
        assert_eq!(Scale::SevenPoint.label(0), None);
    }

    #[test]
    fn test_serde_uses_identifier() {
        let json = serde_json::to_string(&Scale::SevenPoint).expect("serialize");
        assert_eq!(json, "\"1-7\"");
        let scale: Scale = serde_json::from_str("\"1-4\"").expect("deserialize");
        assert_eq!(scale, Scale::FourPoint);
    }
}
