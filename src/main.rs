//! wiki-export: export a project wiki from a Redmine database into a
//! Sphinx-ready reStructuredText tree.

use anyhow::Result;

fn main() -> Result<()> {
    wiki_export::cli::run()
}
