use super::password::Password;
use super::tag::SceneTag;
use super::ValidationError;

/// A choice the player can make from a scene.
#[derive(Debug, Clone, Eq)]
pub struct Action {
    prompt: String,
    result_tag: SceneTag,
    password: Option<Password>,
}

impl Action {
    pub fn new(
        prompt: &str,
        result_tag: i64,
        password: Option<Password>,
    ) -> Result<Action, ValidationError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ValidationError::EmptyText {
                field: "action prompt",
            });
        }
        let result_tag = SceneTag::from_raw(result_tag, "action result")?;
        Ok(Action {
            prompt: prompt.to_string(),
            result_tag,
            password,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Tag of the scene this action leads to when performed.
    pub fn result_tag(&self) -> SceneTag {
        self.result_tag
    }

    pub fn needs_password(&self) -> bool {
        self.password.is_some()
    }

    pub fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.prompt == other.prompt && self.result_tag == other.result_tag
    }
}
