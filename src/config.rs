/// Game configuration — file locations and play options.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::schema::password::EntryRule;
use crate::schema::tag::SceneTag;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Everything a session needs to know from outside the story itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "GameConfig", default)]
pub struct GameConfig {
    /// Story file; `.ron` is read as RON, anything else as JSON.
    pub story_path: PathBuf,
    /// File holding the save record.
    pub save_path: PathBuf,
    /// Tag of the first scene.
    pub start_tag: SceneTag,
    /// Entry rule for passwords that do not name their own.
    pub password_entry: EntryRule,
    /// Clear the terminal before each scene and menu.
    pub clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            story_path: PathBuf::from("data/story.json"),
            save_path: PathBuf::from("data/save.txt"),
            start_tag: SceneTag(0),
            password_entry: EntryRule::Digits,
            clear_screen: true,
        }
    }
}

impl GameConfig {
    /// Load a configuration from a RON file. Missing fields keep their defaults.
    pub fn load_from_ron(path: &Path) -> Result<GameConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    pub fn parse_ron(input: &str) -> Result<GameConfig, ConfigError> {
        Ok(ron::from_str(input)?)
    }
}
