/// Navigator — resolves tags to scenes, staying put on dangling links.

use log::{debug, warn};
use thiserror::Error;

use crate::core::console::Console;
use crate::core::game::SessionError;
use crate::core::prompt::report_error;
use crate::core::story::StoryGraph;
use crate::schema::scene::Scene;
use crate::schema::tag::SceneTag;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Tag {0} leads nowhere.")]
    DanglingReference(SceneTag),
}

/// Look up `tag` without any side effects.
pub fn try_resolve(graph: &StoryGraph, tag: SceneTag) -> Result<&Scene, NavigationError> {
    graph
        .get(tag)
        .ok_or(NavigationError::DanglingReference(tag))
}

/// Resolve the scene a session starts in. A missing start tag is fatal.
pub fn start(graph: &StoryGraph, tag: SceneTag) -> Result<&Scene, NavigationError> {
    try_resolve(graph, tag)
}

/// Move to `tag`, or report the broken link and return `fallback`.
pub fn resolve<'a>(
    graph: &'a StoryGraph,
    tag: SceneTag,
    fallback: &'a Scene,
    console: &mut dyn Console,
) -> Result<&'a Scene, SessionError> {
    match try_resolve(graph, tag) {
        Ok(scene) => {
            debug!("navigating {} -> {}", fallback.tag(), tag);
            Ok(scene)
        }
        Err(err) => {
            warn!("staying on scene {}: {}", fallback.tag(), err);
            report_error(console, &err.to_string())?;
            Ok(fallback)
        }
    }
}
