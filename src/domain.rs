//! Core value records shared across the pipeline stages.

/// A fully extracted wiki page, ready to be rendered to disk.
///
/// Constructed once by the extractor and never mutated afterwards; the
/// renderer produces a new collection when it appends the navigation index
/// to the root page rather than editing in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Human-readable page title; may contain arbitrary Unicode.
    pub title: String,
    /// Output filename, filesystem-safe and unique within the export.
    pub filename: String,
    /// Raw page body, passed through without markup translation.
    pub content: String,
    /// True for the single page that is the wiki's designated root.
    pub is_start_page: bool,
}

/// A project row, as much of it as the exporter needs.
#[derive(Debug, Clone)]
pub struct ProjectRecord {
    pub id: i64,
    pub identifier: String,
    pub name: String,
}

/// A wiki row. `start_page` is the title of the designated root page.
#[derive(Debug, Clone)]
pub struct WikiRecord {
    pub id: i64,
    pub start_page: String,
}

/// A wiki page row without its body; content is fetched separately.
#[derive(Debug, Clone)]
pub struct PageRecord {
    pub id: i64,
    pub title: String,
}
