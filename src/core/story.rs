/// Story graph — raw story records, loading, and index construction.

use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;
use thiserror::Error;

use crate::schema::action::Action;
use crate::schema::password::{EntryRule, Password};
use crate::schema::scene::Scene;
use crate::schema::tag::SceneTag;
use crate::schema::ValidationError;

#[derive(Debug, Error)]
pub enum StoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid scene {tag}: {source}")]
    Validation {
        tag: i64,
        #[source]
        source: ValidationError,
    },
    #[error("Tag {0} is not unique.")]
    DuplicateTag(SceneTag),
    #[error("No data has been loaded from the file.")]
    EmptyStory,
}

// Raw records mirror the story file layout; `StoryGraph::from_records`
// turns them into validated scenes.

/// A scene description: one string, or lines to be joined with newlines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Lines(Vec<String>),
}

impl Description {
    pub fn joined(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Lines(lines) => lines.join("\n"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "Password")]
pub struct PasswordRecord {
    pub value: String,
    pub fail: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<EntryRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "Action")]
pub struct ActionRecord {
    pub prompt: String,
    pub result: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<PasswordRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "Scene")]
pub struct SceneRecord {
    pub tag: i64,
    pub title: String,
    pub description: Description,
    #[serde(rename = "gameOver")]
    pub game_over: bool,
    pub actions: Vec<ActionRecord>,
}

impl PasswordRecord {
    fn build(&self) -> Result<Password, ValidationError> {
        let password = Password::new(&self.value, self.fail)?;
        Ok(match self.entry {
            Some(rule) => password.with_entry(rule),
            None => password,
        })
    }
}

impl ActionRecord {
    fn build(&self) -> Result<Action, ValidationError> {
        let password = self.password.as_ref().map(PasswordRecord::build).transpose()?;
        Action::new(&self.prompt, self.result, password)
    }
}

impl SceneRecord {
    fn build(&self) -> Result<Scene, ValidationError> {
        let actions = self
            .actions
            .iter()
            .map(ActionRecord::build)
            .collect::<Result<Vec<_>, _>>()?;
        Scene::new(
            self.tag,
            &self.title,
            &self.description.joined(),
            self.game_over,
            actions,
        )
    }
}

/// How a dangling link leaves its scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// The action's own result tag.
    ActionResult,
    /// The fallback taken when the action's password is wrong.
    PasswordFail,
}

/// A link from an action to a tag absent from the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingLink {
    pub from: SceneTag,
    /// Zero-based action index within `from`.
    pub action: usize,
    pub to: SceneTag,
    pub kind: LinkKind,
}

/// The validated mapping of tags to scenes. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct StoryGraph {
    scenes: FxHashMap<SceneTag, Scene>,
}

impl StoryGraph {
    /// Build a graph from records in file order.
    ///
    /// Any invalid record or repeated tag aborts the whole load.
    pub fn from_records(records: Vec<SceneRecord>) -> Result<StoryGraph, StoryError> {
        let mut scenes = FxHashMap::default();

        for record in &records {
            let scene = record.build().map_err(|source| StoryError::Validation {
                tag: record.tag,
                source,
            })?;
            let tag = scene.tag();
            if scenes.contains_key(&tag) {
                return Err(StoryError::DuplicateTag(tag));
            }
            scenes.insert(tag, scene);
        }

        if scenes.is_empty() {
            return Err(StoryError::EmptyStory);
        }

        debug!("story graph built with {} scenes", scenes.len());
        let graph = StoryGraph { scenes };
        for link in graph.dangling_references() {
            warn!(
                "scene {} action {} points to missing tag {}",
                link.from,
                link.action + 1,
                link.to
            );
        }
        Ok(graph)
    }

    /// Load a story, picking the format from the file extension.
    ///
    /// `.ron` files are read as RON, everything else as JSON.
    pub fn load(path: &Path) -> Result<StoryGraph, StoryError> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("ron") => Self::load_from_ron(path),
            _ => Self::load_from_json(path),
        }
    }

    pub fn load_from_json(path: &Path) -> Result<StoryGraph, StoryError> {
        debug!("loading story from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::parse_json(&contents)
    }

    pub fn parse_json(input: &str) -> Result<StoryGraph, StoryError> {
        let records: Vec<SceneRecord> = serde_json::from_str(input)?;
        Self::from_records(records)
    }

    pub fn load_from_ron(path: &Path) -> Result<StoryGraph, StoryError> {
        debug!("loading story from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    pub fn parse_ron(input: &str) -> Result<StoryGraph, StoryError> {
        let records: Vec<SceneRecord> = ron::from_str(input)?;
        Self::from_records(records)
    }

    pub fn get(&self, tag: SceneTag) -> Option<&Scene> {
        self.scenes.get(&tag)
    }

    pub fn contains(&self, tag: SceneTag) -> bool {
        self.scenes.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// All tags in ascending order.
    pub fn tags(&self) -> Vec<SceneTag> {
        let mut tags: Vec<SceneTag> = self.scenes.keys().copied().collect();
        tags.sort();
        tags
    }

    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.values()
    }

    /// Every action result or password fail tag with no scene behind it,
    /// ordered by source tag.
    pub fn dangling_references(&self) -> Vec<DanglingLink> {
        let mut links = Vec::new();
        for tag in self.tags() {
            let scene = &self.scenes[&tag];
            for (index, action) in scene.actions().iter().enumerate() {
                if !self.contains(action.result_tag()) {
                    links.push(DanglingLink {
                        from: tag,
                        action: index,
                        to: action.result_tag(),
                        kind: LinkKind::ActionResult,
                    });
                }
                if let Some(password) = action.password() {
                    if !self.contains(password.fail_tag()) {
                        links.push(DanglingLink {
                            from: tag,
                            action: index,
                            to: password.fail_tag(),
                            kind: LinkKind::PasswordFail,
                        });
                    }
                }
            }
        }
        links
    }

    /// Tags no chain of actions can reach from `start`, in ascending order.
    ///
    /// Password fail tags count as reachable. A missing `start` makes
    /// every scene unreachable.
    pub fn unreachable_from(&self, start: SceneTag) -> Vec<SceneTag> {
        let mut seen: FxHashSet<SceneTag> = FxHashSet::default();
        let mut queue = VecDeque::new();
        if self.contains(start) {
            seen.insert(start);
            queue.push_back(start);
        }

        while let Some(tag) = queue.pop_front() {
            let Some(scene) = self.scenes.get(&tag) else {
                continue;
            };
            for action in scene.actions() {
                let mut next = vec![action.result_tag()];
                if let Some(password) = action.password() {
                    next.push(password.fail_tag());
                }
                for to in next {
                    if self.contains(to) && seen.insert(to) {
                        queue.push_back(to);
                    }
                }
            }
        }

        self.tags()
            .into_iter()
            .filter(|tag| !seen.contains(tag))
            .collect()
    }
}
