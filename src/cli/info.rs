//! Info command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::extract::filename_for;
use crate::source::{SqliteSource, WikiSource};

#[derive(Args)]
pub struct InfoArgs {
    /// Identifier of the project whose wiki is inspected
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,

    /// Path to the Redmine SQLite database file
    #[arg(short, long, value_name = "FILE", env = "WIKI_EXPORT_DATABASE")]
    pub database: Option<PathBuf>,

    /// Path to config file (wiki-export.toml or .wiki-export.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Resolve the project and wiki, then list every page with the filename it
/// would be exported under. Reads no page content and writes nothing.
pub fn run(args: InfoArgs) -> Result<()> {
    if args.identifier.trim().is_empty() {
        bail!("Project identifier must not be empty");
    }

    let config = load_config(Path::new("."), args.config.as_deref())?;
    let database = args.database.or(config.database).context(
        "No database configured; pass --database or set `database` in wiki-export.toml",
    )?;

    let source = SqliteSource::open(&database)?;
    let project = source.project_by_identifier(&args.identifier)?;
    let wiki = source.wiki_by_project(project.id)?;
    let pages = source.pages_by_wiki(wiki.id)?;

    println!("Project: {} ({})", project.name, project.identifier);
    println!("Start page: {}", wiki.start_page);
    println!("Pages:");
    for page in &pages {
        let marker = if page.title == wiki.start_page {
            " (start page)"
        } else {
            ""
        };
        println!(
            "    {}{} \u{2192} {}",
            page.title,
            marker,
            filename_for(&page.title)
        );
    }
    println!("{} pages", pages.len());

    Ok(())
}
