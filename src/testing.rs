//! Test doubles for driving a session without a terminal or filesystem.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use crate::core::console::Console;
use crate::core::save::{parse_record, SaveError, SaveStore};
use crate::schema::tag::SceneTag;

/// A console fed from a fixed script of input lines.
///
/// Output and prompts are captured separately; once the script runs out
/// `read_line` reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
    prompts: Vec<String>,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Everything written so far, prompts excluded.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Prompts shown, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.clone()
    }

    /// Number of screen clears requested.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Input lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }
}

#[derive(Debug, Default)]
struct MemoryRecord {
    contents: Option<String>,
    fail_writes: bool,
}

/// An in-memory save record. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct MemorySaveStore {
    record: Rc<RefCell<MemoryRecord>>,
}

impl MemorySaveStore {
    /// A store whose record already holds `contents` verbatim.
    pub fn with_contents(contents: &str) -> Self {
        let store = Self::default();
        store.record.borrow_mut().contents = Some(contents.to_string());
        store
    }

    /// Make every following write fail as an unwritable target would.
    pub fn fail_writes(&self, fail: bool) {
        self.record.borrow_mut().fail_writes = fail;
    }

    pub fn contents(&self) -> Option<String> {
        self.record.borrow().contents.clone()
    }
}

impl SaveStore for MemorySaveStore {
    fn write(&self, tag: SceneTag) -> Result<(), SaveError> {
        let mut record = self.record.borrow_mut();
        if record.fail_writes {
            return Err(SaveError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "save target is read-only",
            )));
        }
        record.contents = Some(tag.to_string());
        Ok(())
    }

    fn read(&self) -> Result<SceneTag, SaveError> {
        match self.record.borrow().contents.as_deref() {
            Some(contents) => parse_record(contents),
            None => Err(SaveError::NotFound),
        }
    }
}
