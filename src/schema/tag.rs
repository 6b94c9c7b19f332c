use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::ValidationError;

/// Newtype wrapper for scene tags, the story graph's primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SceneTag(pub u64);

impl SceneTag {
    /// Validate a raw integer read from story data.
    ///
    /// `field` names the offending field in the error message.
    pub fn from_raw(value: i64, field: &'static str) -> Result<SceneTag, ValidationError> {
        u64::try_from(value)
            .map(SceneTag)
            .map_err(|_| ValidationError::NegativeTag { field, value })
    }
}

impl fmt::Display for SceneTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when text does not hold a non-negative integer tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a non-negative integer")]
pub struct ParseTagError(pub String);

impl FromStr for SceneTag {
    type Err = ParseTagError;

    /// Parses an optionally signed decimal integer, rejecting negatives.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
            Ok(value) if value >= 0 => Ok(SceneTag(value as u64)),
            _ => Err(ParseTagError(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_accepts_zero_and_positive() {
        assert_eq!(SceneTag::from_raw(0, "tag").unwrap(), SceneTag(0));
        assert_eq!(SceneTag::from_raw(42, "tag").unwrap(), SceneTag(42));
    }

    #[test]
    fn from_raw_rejects_negative() {
        let err = SceneTag::from_raw(-1, "result").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NegativeTag {
                field: "result",
                value: -1
            }
        );
        assert!(err.to_string().contains("result"));
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        assert_eq!("  7\n".parse::<SceneTag>().unwrap(), SceneTag(7));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("-5".parse::<SceneTag>().is_err());
        assert!("seven".parse::<SceneTag>().is_err());
        assert!("".parse::<SceneTag>().is_err());
        assert!("1.5".parse::<SceneTag>().is_err());
    }

    #[test]
    fn parse_error_message() {
        let err = "-5".parse::<SceneTag>().unwrap_err();
        assert_eq!(err, ParseTagError("-5".to_string()));
        assert_eq!(err.to_string(), "'-5' is not a non-negative integer");
    }
}
