//! reStructuredText output: navigation index synthesis and file writing.

use crate::domain::Page;
use crate::error::ExportError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Build the `.. toctree::` block listing every non-root page by its
/// filename stem, in input order.
///
/// A wiki with no child pages needs no navigation, so the block is entirely
/// absent then; not even the directive header is emitted.
pub fn toctree(pages: &[Page]) -> String {
    let children: Vec<&Page> = pages.iter().filter(|p| !p.is_start_page).collect();
    if children.is_empty() {
        return String::new();
    }

    let mut block = String::from(".. toctree::\n   :maxdepth: 2\n\n");
    for page in children {
        let stem = Path::new(&page.filename)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| page.filename.clone());
        block.push_str("   ");
        block.push_str(&stem);
        block.push('\n');
    }
    block
}

/// Return the page set with the navigation index appended to the root page,
/// separated from its body by a blank line.
///
/// Pure: consumes the input and produces a fresh collection, so a caller can
/// never observe a half-updated root. When the index is empty (one-page
/// wiki) every page passes through unchanged.
pub fn finalize_root(pages: Vec<Page>) -> Vec<Page> {
    let index = toctree(&pages);
    if index.is_empty() {
        return pages;
    }
    pages
        .into_iter()
        .map(|page| {
            if page.is_start_page {
                Page {
                    content: format!("{}\n\n{}", page.content, index),
                    ..page
                }
            } else {
                page
            }
        })
        .collect()
}

/// Create the output directory if absent. Re-running against an existing
/// writable directory is not an error.
pub fn ensure_output_dir(path: &Path) -> Result<(), ExportError> {
    if path.exists() && !path.is_dir() {
        return Err(ExportError::OutputNotADirectory(path.to_path_buf()));
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// Write one UTF-8 file per page into `dir`, overwriting prior files of the
/// same name. Aborts on the first filesystem error.
pub fn write_pages(dir: &Path, pages: &[Page]) -> Result<(), ExportError> {
    for page in pages {
        let path = dir.join(&page.filename);
        debug!("writing {}", path.display());
        fs::write(&path, page.content.as_bytes())?;
    }
    Ok(())
}

/// Run the full render sequence: index → finalize root → ensure directory →
/// write. Returns the finalized pages so the caller can report what landed
/// on disk.
pub fn render_to_dir(pages: Vec<Page>, output_dir: &Path) -> Result<Vec<Page>, ExportError> {
    let pages = finalize_root(pages);
    ensure_output_dir(output_dir)?;
    write_pages(output_dir, &pages)?;
    Ok(pages)
}
