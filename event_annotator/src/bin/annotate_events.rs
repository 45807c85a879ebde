//! Annotate Events - command-line entry point.
//!
//! Loads the story and skill databases, reads one or more saved check-event
//! responses and prints a tree per unchecked event.

use clap::Parser;
use event_annotator::{AnnotatorConfig, EventTreeBuilder, Result, TreeWriter};
use event_catalog::{EventRecord, SkillDatabase, StoryDatabase};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "annotate_events", about = "Show what each choice of an unchecked event does")]
struct Args {
    /// Story database (JSON array of stories)
    #[arg(long)]
    stories: PathBuf,

    /// Skill database (JSON array of skills)
    #[arg(long)]
    skills: PathBuf,

    /// Annotator config (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show skill activation conditions regardless of the config
    #[arg(long)]
    skill_condition: bool,

    /// Hide skill hint levels regardless of the config
    #[arg(long)]
    no_hint_level: bool,

    /// Print without colours
    #[arg(long, conflicts_with = "json")]
    plain: bool,

    /// Print the trees as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Saved check-event responses
    #[arg(required = true)]
    responses: Vec<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("event_annotator=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AnnotatorConfig::from_file(path)?,
        None => AnnotatorConfig::default(),
    };
    let mut options = config.options();
    if args.skill_condition {
        options.show_skill_condition = true;
    }
    if args.no_hint_level {
        options.show_skill_hint_level = false;
    }

    let stories = StoryDatabase::from_file(&args.stories)?;
    let skills = SkillDatabase::from_file(&args.skills)?;
    tracing::info!("Loaded {} stories and {} skills", stories.len(), skills.len());

    let builder = EventTreeBuilder::with_strings(&stories, &skills, config.strings.clone());

    for path in &args.responses {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}, skipping", path.display(), e);
                continue;
            }
        };
        let record = match EventRecord::from_response_json(&content) {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::info!("{} has no unchecked events, skipping", path.display());
                continue;
            }
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}, skipping", path.display(), e);
                continue;
            }
        };

        let forest = builder.build_forest(&record, options)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&forest)?);
        } else if args.plain {
            let writer = TreeWriter::plain();
            for tree in &forest {
                print!("{}", writer.render(tree));
            }
        } else {
            let writer = TreeWriter::ansi();
            for tree in &forest {
                print!("{}", writer.render(tree));
            }
        }
    }

    Ok(())
}
