//! Page extraction: wiki rows → in-memory `Page` records.

pub mod naming;

pub use naming::{filename_for, FilenameStem, RST_EXTENSION};

use crate::domain::Page;
use crate::error::ExportError;
use crate::source::WikiSource;
use std::collections::HashMap;
use tracing::debug;

/// Extract every page of the wiki belonging to `identifier`.
///
/// Resolves project → wiki → pages, then fetches each page's body and
/// computes its output filename. The returned order is the source's fetch
/// order, which downstream rendering treats as canonical.
///
/// Any lookup failure aborts the whole extraction; there is no partial
/// result. Filename collisions and start-page violations are detected here,
/// before anything touches the filesystem.
pub fn extract(source: &dyn WikiSource, identifier: &str) -> Result<Vec<Page>, ExportError> {
    let project = source.project_by_identifier(identifier)?;
    let wiki = source.wiki_by_project(project.id)?;
    debug!(
        "extracting wiki {} of project '{}', start page '{}'",
        wiki.id, project.identifier, wiki.start_page
    );

    let records = source.pages_by_wiki(wiki.id)?;

    // Exactly one root per export. Zero or several means the source data is
    // inconsistent and must not be silently resolved. Checked on the titles
    // alone, before any page body is fetched.
    let roots = records
        .iter()
        .filter(|r| r.title == wiki.start_page)
        .count();
    match roots {
        1 => {}
        0 => {
            return Err(ExportError::StartPageMissing {
                title: wiki.start_page,
            })
        }
        count => {
            return Err(ExportError::StartPageConflict {
                title: wiki.start_page,
                count,
            })
        }
    }

    let mut pages = Vec::with_capacity(records.len());
    let mut claimed: HashMap<String, String> = HashMap::new();

    for record in &records {
        let content = source.content_by_page(record)?;
        let filename = naming::filename_for(&record.title);
        if let Some(first) = claimed.insert(filename.clone(), record.title.clone()) {
            return Err(ExportError::FilenameCollision {
                filename,
                first,
                second: record.title.clone(),
            });
        }
        pages.push(Page {
            title: record.title.clone(),
            filename,
            content,
            is_start_page: record.title == wiki.start_page,
        });
    }

    Ok(pages)
}
