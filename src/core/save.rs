/// Save records — a single scene tag persisted between sessions.

use log::{debug, info};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::schema::tag::SceneTag;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no save record found")]
    NotFound,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("corrupted save record: {0}")]
    Corrupted(String),
}

/// Where the save record lives.
pub trait SaveStore {
    /// Overwrite the record with `tag`.
    fn write(&self, tag: SceneTag) -> Result<(), SaveError>;

    /// Read back the stored tag.
    fn read(&self) -> Result<SceneTag, SaveError>;
}

/// Parse the contents of a save record: one non-negative integer,
/// optionally surrounded by whitespace.
pub fn parse_record(contents: &str) -> Result<SceneTag, SaveError> {
    contents
        .parse::<SceneTag>()
        .map_err(|e| SaveError::Corrupted(e.to_string()))
}

/// A save record kept in a plain text file.
#[derive(Debug, Clone)]
pub struct FileSaveStore {
    path: PathBuf,
}

impl FileSaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for FileSaveStore {
    fn write(&self, tag: SceneTag) -> Result<(), SaveError> {
        std::fs::write(&self.path, tag.to_string())?;
        info!("saved scene {} to {}", tag, self.path.display());
        Ok(())
    }

    fn read(&self) -> Result<SceneTag, SaveError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(SaveError::NotFound),
            Err(e) => return Err(SaveError::Io(e)),
        };
        debug!("read save record from {}", self.path.display());
        parse_record(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("story-engine-{}-{}", std::process::id(), name))
    }

    #[test]
    fn parse_record_values() {
        assert_eq!(parse_record("12").unwrap(), SceneTag(12));
        assert_eq!(parse_record("3\n").unwrap(), SceneTag(3));
        assert!(matches!(parse_record("-5"), Err(SaveError::Corrupted(_))));
        assert!(matches!(parse_record("abc"), Err(SaveError::Corrupted(_))));
        assert!(matches!(parse_record(""), Err(SaveError::Corrupted(_))));
    }

    #[test]
    fn trailing_content_is_corrupted() {
        assert!(matches!(
            parse_record("5\ngarbage"),
            Err(SaveError::Corrupted(_))
        ));
    }

    #[test]
    fn file_round_trip() {
        let path = temp_path("round-trip.txt");
        let store = FileSaveStore::new(&path);
        store.write(SceneTag(7)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "7");
        assert_eq!(store.read().unwrap(), SceneTag(7));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_not_found() {
        let store = FileSaveStore::new(temp_path("never-written.txt"));
        assert!(matches!(store.read(), Err(SaveError::NotFound)));
    }

    #[test]
    fn unwritable_target_is_io_error() {
        let store = FileSaveStore::new(temp_path("no-such-dir").join("save.txt"));
        assert!(matches!(store.write(SceneTag(1)), Err(SaveError::Io(_))));
    }
}
