use thiserror::Error;

use super::action::Action;
use super::tag::SceneTag;
use super::ValidationError;

/// Header shown above every scene the player can still act in.
pub const MENU_HINT: &str = "Type 0 to access the game's menu";
const MENU_RULE: &str = "--------------------------------";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("scene {tag} has no action at index {index} ({count} available)")]
    ActionOutOfRange {
        tag: SceneTag,
        index: usize,
        count: usize,
    },
}

/// A node in the story graph: a narrative beat and the choices leaving it.
///
/// A scene either ends the game and has no actions, or has at least one.
#[derive(Debug, Clone)]
pub struct Scene {
    tag: SceneTag,
    title: String,
    description: String,
    is_terminal: bool,
    actions: Vec<Action>,
}

impl Scene {
    pub fn new(
        tag: i64,
        title: &str,
        description: &str,
        is_terminal: bool,
        actions: Vec<Action>,
    ) -> Result<Scene, ValidationError> {
        let tag = SceneTag::from_raw(tag, "scene tag")?;
        if title.is_empty() {
            return Err(ValidationError::EmptyText {
                field: "scene title",
            });
        }
        if description.is_empty() {
            return Err(ValidationError::EmptyText {
                field: "scene description",
            });
        }
        if is_terminal && !actions.is_empty() {
            return Err(ValidationError::TerminalWithActions {
                count: actions.len(),
            });
        }
        if !is_terminal && actions.is_empty() {
            return Err(ValidationError::MissingActions);
        }

        Ok(Scene {
            tag,
            title: title.to_uppercase(),
            description: description.to_string(),
            is_terminal,
            actions,
        })
    }

    pub fn tag(&self) -> SceneTag {
        self.tag
    }

    /// Upper-cased title.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true if reaching this scene ends the game.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Zero-based action lookup.
    pub fn action(&self, index: usize) -> Result<&Action, SceneError> {
        self.actions
            .get(index)
            .ok_or(SceneError::ActionOutOfRange {
                tag: self.tag,
                index,
                count: self.actions.len(),
            })
    }

    /// Produce the text shown to the player for this scene.
    ///
    /// Actions are numbered from 1; 0 is reserved for the menu.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if !self.is_terminal {
            out.push_str(MENU_HINT);
            out.push('\n');
            out.push_str(MENU_RULE);
            out.push_str("\n\n");
        }
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&self.description);
        out.push_str("\n\n");
        for (i, action) in self.actions.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, action.prompt()));
        }
        out
    }
}
