//! Read-only access to the wiki's backing database.

pub mod sqlite;

pub use sqlite::SqliteSource;

use crate::domain::{PageRecord, ProjectRecord, WikiRecord};
use crate::error::ExportError;

/// The four queries the export pipeline issues, in dependency order.
///
/// Implementations are strictly read-only; the exporter never writes to the
/// source and opens no transaction. Keeping this surface narrow lets the
/// extractor be tested against an in-memory fake instead of a real database.
pub trait WikiSource {
    /// Look up a project by its unique identifier.
    fn project_by_identifier(&self, identifier: &str) -> Result<ProjectRecord, ExportError>;

    /// Look up the single wiki owned by a project.
    fn wiki_by_project(&self, project_id: i64) -> Result<WikiRecord, ExportError>;

    /// Fetch all pages belonging to a wiki. The returned order is treated as
    /// the canonical display order for the whole export.
    fn pages_by_wiki(&self, wiki_id: i64) -> Result<Vec<PageRecord>, ExportError>;

    /// Fetch the current body text for a page. A page without a content row
    /// is a data-integrity failure; empty-but-present content is fine.
    fn content_by_page(&self, page: &PageRecord) -> Result<String, ExportError>;
}
