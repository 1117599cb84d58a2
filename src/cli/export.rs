//! Export command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::extract;
use crate::render;
use crate::source::SqliteSource;

#[derive(Args)]
pub struct ExportArgs {
    /// Identifier of the project whose wiki is exported
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,

    /// Path to the Redmine SQLite database file
    #[arg(short, long, value_name = "FILE", env = "WIKI_EXPORT_DATABASE")]
    pub database: Option<PathBuf>,

    /// Directory receiving the rendered .rst files
    #[arg(short, long, value_name = "DIR", env = "WIKI_EXPORT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path to config file (wiki-export.toml or .wiki-export.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> Result<()> {
    if args.identifier.trim().is_empty() {
        bail!("Project identifier must not be empty");
    }

    let config = load_config(Path::new("."), args.config.as_deref())?;
    let database = args.database.or(config.database).context(
        "No database configured; pass --database or set `database` in wiki-export.toml",
    )?;
    let output = args
        .output
        .or(config.output)
        .unwrap_or_else(|| PathBuf::from("output"));

    let source = SqliteSource::open(&database)?;
    let pages = extract::extract(&source, &args.identifier)?;
    let pages = render::render_to_dir(pages, &output)?;

    for page in &pages {
        let marker = if page.is_start_page { " (start page)" } else { "" };
        println!(
            "{}{} \u{2192} {}",
            page.title,
            marker,
            output.join(&page.filename).display()
        );
    }
    println!("Exported {} pages to {}", pages.len(), output.display());

    Ok(())
}
