//! Story data model — scenes, actions, passwords and the tags that link them.

pub mod action;
pub mod password;
pub mod scene;
pub mod tag;

use thiserror::Error;

/// A story value failed construction-time validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be a non-empty string")]
    EmptyText { field: &'static str },
    #[error("{field} must be a non-negative integer, got {value}")]
    NegativeTag { field: &'static str, value: i64 },
    #[error("a scene that ends the game cannot have actions ({count} given)")]
    TerminalWithActions { count: usize },
    #[error("a scene that does not end the game needs at least one action")]
    MissingActions,
}
