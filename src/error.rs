//! Error types for the export pipeline.

use std::path::PathBuf;

/// Everything that can abort an export.
///
/// Lookup failures carry the key that was queried so a failed run can be
/// diagnosed without re-running under a debugger.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A required record does not exist.
    #[error("no {what} found for '{key}'")]
    NotFound { what: &'static str, key: String },

    /// A lookup that must resolve to a single record matched several.
    #[error("{what} lookup for '{key}' matched more than one record")]
    Ambiguous { what: &'static str, key: String },

    /// Two distinct page titles resolved to the same output filename.
    #[error("pages '{first}' and '{second}' both map to output file '{filename}'")]
    FilenameCollision {
        filename: String,
        first: String,
        second: String,
    },

    /// The wiki names a start page but no fetched page carries that title.
    #[error("wiki declares start page '{title}' but no page carries that title")]
    StartPageMissing { title: String },

    /// More than one fetched page carries the start page title.
    #[error("{count} pages carry the start page title '{title}'")]
    StartPageConflict { title: String, count: usize },

    /// The output path exists but is not a directory.
    #[error("output path {} exists and is not a directory", .0.display())]
    OutputNotADirectory(PathBuf),

    /// Query against the backing database failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Filesystem error while creating the output directory or writing a page.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
