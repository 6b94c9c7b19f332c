use serde::{Deserialize, Serialize};

use super::tag::SceneTag;
use super::ValidationError;

/// What the player is allowed to type when asked for a password.
///
/// The rule only governs re-prompting; it never changes whether an
/// accepted attempt matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryRule {
    /// Any non-empty line is an attempt.
    Any,
    /// Keypad style: only decimal digits are accepted.
    #[default]
    Digits,
}

impl EntryRule {
    /// Returns true if `input` is an acceptable attempt under this rule.
    pub fn accepts(&self, input: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Digits => !input.is_empty() && input.chars().all(|c| c.is_numeric()),
        }
    }

    /// Message shown to the player after a rejected attempt.
    pub fn rejection_message(&self) -> &'static str {
        match self {
            Self::Any => "Please type something.",
            Self::Digits => "The keypad only accepts digits.",
        }
    }
}

/// A secret gating an action, with the scene to fall back to on mismatch.
#[derive(Debug, Clone, Eq)]
pub struct Password {
    secret: String,
    fail_tag: SceneTag,
    entry: Option<EntryRule>,
}

impl Password {
    pub fn new(secret: &str, fail_tag: i64) -> Result<Password, ValidationError> {
        let secret = normalize(secret);
        if secret.is_empty() {
            return Err(ValidationError::EmptyText {
                field: "password value",
            });
        }
        let fail_tag = SceneTag::from_raw(fail_tag, "password fail")?;
        Ok(Password {
            secret,
            fail_tag,
            entry: None,
        })
    }

    /// Attach an entry rule that overrides the game-wide default.
    pub fn with_entry(mut self, entry: EntryRule) -> Password {
        self.entry = Some(entry);
        self
    }

    /// The normalized (trimmed, lower-cased) secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn fail_tag(&self) -> SceneTag {
        self.fail_tag
    }

    pub fn entry(&self) -> Option<EntryRule> {
        self.entry
    }

    /// Case- and surrounding-whitespace-insensitive comparison.
    pub fn matches(&self, attempt: &str) -> bool {
        normalize(attempt) == self.secret
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.secret == other.secret && self.fail_tag == other.fail_tag
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
