/// Story Linter — validates a story file and checks its links.
///
/// Usage: story_linter <story_file> [--start <tag>]

use clap::Parser;
use std::path::PathBuf;
use std::process;

use story_engine::core::story::{LinkKind, StoryGraph};
use story_engine::schema::tag::SceneTag;

#[derive(Debug, Parser)]
#[command(name = "story_linter", version)]
#[command(about = "Validate a story file: structure, dangling links, unreachable scenes")]
struct Args {
    /// Story file (.json, or .ron)
    story: PathBuf,

    /// Tag of the first scene, used for reachability
    #[arg(long, default_value_t = 0)]
    start: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let start = SceneTag(args.start);

    let graph = match StoryGraph::load(&args.story) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("ERROR: Failed to load story file: {}", e);
            process::exit(1);
        }
    };

    println!("Loaded {} scenes", graph.len());

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if !graph.contains(start) {
        errors.push(format!("Start tag {} does not exist", start));
    }

    for link in graph.dangling_references() {
        let via = match link.kind {
            LinkKind::ActionResult => "leads to",
            LinkKind::PasswordFail => "falls back on wrong password to",
        };
        errors.push(format!(
            "Scene {} action {} {} missing tag {}",
            link.from,
            link.action + 1,
            via,
            link.to
        ));
    }

    if graph.contains(start) {
        for tag in graph.unreachable_from(start) {
            warnings.push(format!("Scene {} is unreachable from scene {}", tag, start));
        }
    }

    if !graph.scenes().any(|scene| scene.is_terminal()) {
        warnings.push("Story has no ending scene".to_string());
    }

    println!("\n=== Story Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}
