/// Session menu — resume, save, load, quit.

use log::{info, warn};

use crate::core::console::Console;
use crate::core::game::SessionError;
use crate::core::prompt::{ask_choice, pause, report_error};
use crate::core::save::{SaveError, SaveStore};
use crate::core::story::StoryGraph;
use crate::schema::scene::Scene;

const SAVE_FAILED: &str = "Could not save the data to a file.";
const SAVE_NOT_FOUND: &str = "Data file not found; could not load previous game.";
const SAVE_CORRUPTED: &str = "Corrupted data; could not load previous game.";

/// Entries of the session menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    Resume,
    Save,
    Load,
    Quit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 4] = [Self::Resume, Self::Save, Self::Load, Self::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::Save => "Save",
            Self::Load => "Load",
            Self::Quit => "Quit",
        }
    }

    /// One-based menu number to option.
    pub fn from_choice(choice: usize) -> Option<MenuOption> {
        choice
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }
}

/// What the game loop does after the menu closes.
#[derive(Debug, Clone, Copy)]
pub enum MenuOutcome<'a> {
    /// Carry on from this scene.
    Continue(&'a Scene),
    /// The player asked to leave.
    Quit,
}

pub struct SessionMenu {
    store: Box<dyn SaveStore>,
}

impl SessionMenu {
    pub fn new(store: Box<dyn SaveStore>) -> Self {
        Self { store }
    }

    /// Render the menu text.
    pub fn render() -> String {
        let mut out = String::from("MENU\nThis is the game's menu.\n\n");
        for (i, option) in MenuOption::ALL.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, option.label()));
        }
        out
    }

    /// Show the menu, run the chosen option, and say where play resumes.
    ///
    /// Save and load failures are reported to the player and leave
    /// `current` in place.
    pub fn open<'a>(
        &self,
        graph: &'a StoryGraph,
        current: &'a Scene,
        console: &mut dyn Console,
    ) -> Result<MenuOutcome<'a>, SessionError> {
        console.clear()?;
        console.write(&Self::render())?;

        // ask_choice bounds the answer to 1..=ALL.len()
        let choice = ask_choice(console, 1, MenuOption::ALL.len())?;
        let option = MenuOption::ALL[choice - 1];

        match option {
            MenuOption::Resume => Ok(MenuOutcome::Continue(current)),
            MenuOption::Save => self.save(current, console).map(MenuOutcome::Continue),
            MenuOption::Load => self.load(graph, current, console).map(MenuOutcome::Continue),
            MenuOption::Quit => {
                console.say("Exiting game...")?;
                Ok(MenuOutcome::Quit)
            }
        }
    }

    fn save<'a>(
        &self,
        current: &'a Scene,
        console: &mut dyn Console,
    ) -> Result<&'a Scene, SessionError> {
        match self.store.write(current.tag()) {
            Ok(()) => {
                console.say("Done.")?;
                pause(console)?;
            }
            Err(e) => {
                warn!("save failed: {}", e);
                report_error(console, SAVE_FAILED)?;
            }
        }
        Ok(current)
    }

    fn load<'a>(
        &self,
        graph: &'a StoryGraph,
        current: &'a Scene,
        console: &mut dyn Console,
    ) -> Result<&'a Scene, SessionError> {
        let message = match self.store.read() {
            Ok(tag) => match graph.get(tag) {
                Some(scene) => {
                    info!("loaded save record, resuming at scene {}", tag);
                    console.say("Done.")?;
                    pause(console)?;
                    return Ok(scene);
                }
                None => {
                    warn!("save record points to missing scene {}", tag);
                    SAVE_CORRUPTED
                }
            },
            Err(SaveError::NotFound) => SAVE_NOT_FOUND,
            Err(e) => {
                warn!("load failed: {}", e);
                SAVE_CORRUPTED
            }
        };
        report_error(console, message)?;
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tag::SceneTag;
    use crate::testing::{MemorySaveStore, ScriptedConsole};

    fn graph() -> StoryGraph {
        StoryGraph::parse_json(
            r#"[
                { "tag": 0, "title": "A", "description": "a", "gameOver": false,
                  "actions": [ { "prompt": "Go", "result": 1 } ] },
                { "tag": 1, "title": "B", "description": "b", "gameOver": false,
                  "actions": [ { "prompt": "Back", "result": 0 } ] }
            ]"#,
        )
        .unwrap()
    }

    fn continued<'a>(outcome: MenuOutcome<'a>) -> &'a Scene {
        match outcome {
            MenuOutcome::Continue(scene) => scene,
            MenuOutcome::Quit => panic!("menu quit unexpectedly"),
        }
    }

    #[test]
    fn option_numbering() {
        assert_eq!(MenuOption::from_choice(1), Some(MenuOption::Resume));
        assert_eq!(MenuOption::from_choice(4), Some(MenuOption::Quit));
        assert_eq!(MenuOption::from_choice(0), None);
        assert_eq!(MenuOption::from_choice(5), None);
    }

    #[test]
    fn render_lists_options() {
        assert_eq!(
            SessionMenu::render(),
            "MENU\nThis is the game's menu.\n\n1. Resume\n2. Save\n3. Load\n4. Quit\n"
        );
    }

    #[test]
    fn resume_keeps_scene() {
        let g = graph();
        let here = g.get(SceneTag(1)).unwrap();
        let menu = SessionMenu::new(Box::new(MemorySaveStore::default()));
        let mut console = ScriptedConsole::new(["1"]);
        let scene = continued(menu.open(&g, here, &mut console).unwrap());
        assert_eq!(scene.tag(), SceneTag(1));
        assert_eq!(console.clears(), 1);
    }

    #[test]
    fn save_then_load() {
        let g = graph();
        let store = MemorySaveStore::default();
        let menu = SessionMenu::new(Box::new(store.clone()));

        let mut console = ScriptedConsole::new(["2", ""]);
        let here = g.get(SceneTag(1)).unwrap();
        continued(menu.open(&g, here, &mut console).unwrap());
        assert_eq!(store.contents().as_deref(), Some("1"));

        let mut console = ScriptedConsole::new(["3", ""]);
        let start = g.get(SceneTag(0)).unwrap();
        let scene = continued(menu.open(&g, start, &mut console).unwrap());
        assert!(std::ptr::eq(scene, here));
        assert!(console.output().contains("Done."));
    }

    #[test]
    fn failed_save_keeps_scene() {
        let g = graph();
        let store = MemorySaveStore::default();
        store.fail_writes(true);
        let menu = SessionMenu::new(Box::new(store.clone()));
        let mut console = ScriptedConsole::new(["2", ""]);
        let here = g.get(SceneTag(0)).unwrap();
        let scene = continued(menu.open(&g, here, &mut console).unwrap());
        assert_eq!(scene.tag(), SceneTag(0));
        assert!(console.output().contains("ERROR!\n  Could not save the data to a file."));
        assert_eq!(store.contents(), None);
    }

    #[test]
    fn load_without_record() {
        let g = graph();
        let menu = SessionMenu::new(Box::new(MemorySaveStore::default()));
        let mut console = ScriptedConsole::new(["3", ""]);
        let here = g.get(SceneTag(1)).unwrap();
        let scene = continued(menu.open(&g, here, &mut console).unwrap());
        assert_eq!(scene.tag(), SceneTag(1));
        assert!(console.output().contains(SAVE_NOT_FOUND));
    }

    #[test]
    fn load_negative_record_is_corrupted() {
        let g = graph();
        let store = MemorySaveStore::with_contents("-5");
        let menu = SessionMenu::new(Box::new(store));
        let mut console = ScriptedConsole::new(["3", ""]);
        let here = g.get(SceneTag(1)).unwrap();
        let scene = continued(menu.open(&g, here, &mut console).unwrap());
        assert_eq!(scene.tag(), SceneTag(1));
        assert!(console.output().contains(SAVE_CORRUPTED));
    }

    #[test]
    fn load_unknown_tag_is_corrupted() {
        let g = graph();
        let menu = SessionMenu::new(Box::new(MemorySaveStore::with_contents("99")));
        let mut console = ScriptedConsole::new(["3", ""]);
        let here = g.get(SceneTag(0)).unwrap();
        let scene = continued(menu.open(&g, here, &mut console).unwrap());
        assert_eq!(scene.tag(), SceneTag(0));
        assert!(console.output().contains(SAVE_CORRUPTED));
    }

    #[test]
    fn out_of_range_option_reprompts() {
        let g = graph();
        let menu = SessionMenu::new(Box::new(MemorySaveStore::default()));
        let mut console = ScriptedConsole::new(["0", "5", "4"]);
        let here = g.get(SceneTag(0)).unwrap();
        assert!(matches!(
            menu.open(&g, here, &mut console).unwrap(),
            MenuOutcome::Quit
        ));
        assert_eq!(
            console
                .output()
                .matches("Invalid input. Choose an integer between 1 and 4")
                .count(),
            2
        );
    }

    #[test]
    fn quit() {
        let g = graph();
        let menu = SessionMenu::new(Box::new(MemorySaveStore::default()));
        let mut console = ScriptedConsole::new(["4"]);
        let here = g.get(SceneTag(0)).unwrap();
        assert!(matches!(
            menu.open(&g, here, &mut console).unwrap(),
            MenuOutcome::Quit
        ));
        assert!(console.output().contains("Exiting game..."));
    }
}
