/// The game loop: scene display, choice collection, and transitions.
///
/// Wires together the story graph, navigator, password checks, and the
/// session menu.

use log::{debug, info};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::GameConfig;
use crate::core::console::Console;
use crate::core::menu::{MenuOutcome, SessionMenu};
use crate::core::navigator::{self, NavigationError};
use crate::core::password_check;
use crate::core::prompt::ask_choice;
use crate::core::save::{FileSaveStore, SaveStore};
use crate::core::story::{StoryError, StoryGraph};
use crate::schema::password::EntryRule;
use crate::schema::scene::{Scene, SceneError};
use crate::schema::tag::SceneTag;

/// Choice value reserved for opening the menu.
pub const MENU_CHOICE: usize = 0;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed before a valid answer was given")]
    InputClosed,
    #[error("story error: {0}")]
    Story(#[from] StoryError),
    #[error("navigation error: {0}")]
    Navigation(#[from] NavigationError),
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),
    #[error("no story was provided")]
    NoStory,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// A terminal scene was reached.
    Finished(SceneTag),
    /// The player quit from the menu.
    Quit,
}

/// A playable story. Built via `Game::builder()`.
pub struct Game {
    graph: StoryGraph,
    menu: SessionMenu,
    start: SceneTag,
    password_entry: EntryRule,
}

/// Builder for constructing a `Game`.
pub struct GameBuilder {
    story_path: Option<PathBuf>,
    save_path: PathBuf,
    start: SceneTag,
    password_entry: EntryRule,
    /// Directly provided story (for testing without files).
    story: Option<StoryGraph>,
    /// Directly provided save store (for testing without files).
    save_store: Option<Box<dyn SaveStore>>,
}

impl Game {
    pub fn builder() -> GameBuilder {
        let defaults = GameConfig::default();
        GameBuilder {
            story_path: None,
            save_path: defaults.save_path,
            start: defaults.start_tag,
            password_entry: defaults.password_entry,
            story: None,
            save_store: None,
        }
    }

    pub fn graph(&self) -> &StoryGraph {
        &self.graph
    }

    pub fn start_tag(&self) -> SceneTag {
        self.start
    }

    /// Play until a terminal scene is reached or the player quits.
    pub fn run(&self, console: &mut dyn Console) -> Result<Ending, SessionError> {
        let mut current = navigator::start(&self.graph, self.start)?;
        info!("starting at scene {}", current.tag());

        loop {
            console.clear()?;
            console.write(&current.render())?;

            if current.is_terminal() {
                console.say("THE END\n")?;
                info!("reached ending scene {}", current.tag());
                return Ok(Ending::Finished(current.tag()));
            }

            let choice = ask_choice(console, MENU_CHOICE, current.action_count())?;
            if choice == MENU_CHOICE {
                match self.menu.open(&self.graph, current, console)? {
                    MenuOutcome::Continue(scene) => current = scene,
                    MenuOutcome::Quit => return Ok(Ending::Quit),
                }
                continue;
            }

            current = self.take_action(current, choice - 1, console)?;
        }
    }

    /// Resolve the zero-based action `index` of `current` to the next scene.
    fn take_action<'a>(
        &'a self,
        current: &'a Scene,
        index: usize,
        console: &mut dyn Console,
    ) -> Result<&'a Scene, SessionError> {
        let action = current.action(index)?;
        let mut destination = action.result_tag();
        if let Some(password) = action.password() {
            if !password_check::check(console, password, self.password_entry)? {
                debug!("wrong password, diverting to {}", password.fail_tag());
                destination = password.fail_tag();
            }
        }
        navigator::resolve(&self.graph, destination, current, console)
    }
}

impl GameBuilder {
    /// Take file locations and play options from a configuration.
    pub fn config(mut self, config: &GameConfig) -> Self {
        self.story_path = Some(config.story_path.clone());
        self.save_path = config.save_path.clone();
        self.start = config.start_tag;
        self.password_entry = config.password_entry;
        self
    }

    pub fn story_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.story_path = Some(path.into());
        self
    }

    pub fn save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    pub fn start_at(mut self, tag: SceneTag) -> Self {
        self.start = tag;
        self
    }

    pub fn password_entry(mut self, rule: EntryRule) -> Self {
        self.password_entry = rule;
        self
    }

    pub fn with_story(mut self, graph: StoryGraph) -> Self {
        self.story = Some(graph);
        self
    }

    pub fn with_save_store(mut self, store: Box<dyn SaveStore>) -> Self {
        self.save_store = Some(store);
        self
    }

    /// Load whatever was not provided directly and check the start scene.
    pub fn build(self) -> Result<Game, SessionError> {
        let graph = match (self.story, self.story_path) {
            (Some(graph), _) => graph,
            (None, Some(path)) => StoryGraph::load(&path)?,
            (None, None) => return Err(SessionError::NoStory),
        };
        navigator::start(&graph, self.start)?;

        let store = self
            .save_store
            .unwrap_or_else(|| Box::new(FileSaveStore::new(self.save_path)));

        Ok(Game {
            graph,
            menu: SessionMenu::new(store),
            start: self.start,
            password_entry: self.password_entry,
        })
    }
}
