/// Play — runs a story in the terminal.
///
/// Usage: play [--story <path>] [--save <path>] [--start <tag>] [--config <path>]
///             [--any-password-entry] [--no-clear]

use clap::Parser;
use std::path::PathBuf;
use std::process;

use story_engine::config::GameConfig;
use story_engine::core::console::Terminal;
use story_engine::core::game::{Ending, Game};
use story_engine::schema::password::EntryRule;
use story_engine::schema::tag::SceneTag;

#[derive(Debug, Parser)]
#[command(name = "play", version)]
#[command(about = "Play a choice-based text adventure")]
struct Args {
    /// RON configuration file; command-line flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Story file (.json, or .ron)
    #[arg(long)]
    story: Option<PathBuf>,

    /// Save record file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Tag of the first scene
    #[arg(long)]
    start: Option<u64>,

    /// Accept any text as a password attempt instead of digits only
    #[arg(long)]
    any_password_entry: bool,

    /// Do not clear the terminal between scenes
    #[arg(long)]
    no_clear: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut config = match args.config {
        Some(ref path) => match GameConfig::load_from_ron(path) {
            Ok(config) => config,
            Err(e) => fatal(&format!("Config file {}: {}", path.display(), e)),
        },
        None => GameConfig::default(),
    };
    if let Some(story) = args.story {
        config.story_path = story;
    }
    if let Some(save) = args.save {
        config.save_path = save;
    }
    if let Some(start) = args.start {
        config.start_tag = SceneTag(start);
    }
    if args.any_password_entry {
        config.password_entry = EntryRule::Any;
    }
    if args.no_clear {
        config.clear_screen = false;
    }

    let game = match Game::builder().config(&config).build() {
        Ok(game) => game,
        Err(e) => fatal(&e.to_string()),
    };

    let mut terminal = Terminal::new(config.clear_screen);
    match game.run(&mut terminal) {
        Ok(Ending::Finished(_)) | Ok(Ending::Quit) => process::exit(0),
        Err(e) => fatal(&e.to_string()),
    }
}

fn fatal(message: &str) -> ! {
    println!("ERROR!\n  {}", message);
    println!("Exiting game...");
    process::exit(1);
}
