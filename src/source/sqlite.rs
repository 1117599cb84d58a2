//! SQLite adapter over the Redmine wiki schema.

use crate::domain::{PageRecord, ProjectRecord, WikiRecord};
use crate::error::ExportError;
use crate::source::WikiSource;
use rusqlite::{params, Connection, OpenFlags, Row};
use std::path::Path;
use tracing::debug;

/// Read-only connection to a Redmine database file.
///
/// The file is opened with `SQLITE_OPEN_READ_ONLY`, so a missing database is
/// a hard error rather than a silently created empty one.
pub struct SqliteSource {
    conn: Connection,
}

impl SqliteSource {
    pub fn open(path: &Path) -> Result<Self, ExportError> {
        if !path.exists() {
            return Err(ExportError::NotFound {
                what: "database file",
                key: path.display().to_string(),
            });
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Run a lookup that must match exactly one row.
    ///
    /// Zero rows is not-found; two or more is ambiguous. The data source is
    /// expected to enforce uniqueness, but an inconsistent one must not be
    /// papered over.
    fn single_row<T>(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
        what: &'static str,
        key: String,
        map: impl FnMut(&Row<'_>) -> rusqlite::Result<T>,
    ) -> Result<T, ExportError> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query_map(params, map)?;
        let first = match rows.next() {
            Some(row) => row?,
            None => return Err(ExportError::NotFound { what, key }),
        };
        if rows.next().is_some() {
            return Err(ExportError::Ambiguous { what, key });
        }
        Ok(first)
    }
}

impl WikiSource for SqliteSource {
    fn project_by_identifier(&self, identifier: &str) -> Result<ProjectRecord, ExportError> {
        debug!("resolving project '{identifier}'");
        self.single_row(
            "SELECT id, identifier, name FROM projects WHERE identifier = ?1",
            params![identifier],
            "project",
            identifier.to_string(),
            |row| {
                Ok(ProjectRecord {
                    id: row.get(0)?,
                    identifier: row.get(1)?,
                    name: row.get(2)?,
                })
            },
        )
    }

    fn wiki_by_project(&self, project_id: i64) -> Result<WikiRecord, ExportError> {
        debug!("resolving wiki for project {project_id}");
        self.single_row(
            "SELECT id, start_page FROM wikis WHERE project_id = ?1",
            params![project_id],
            "wiki",
            format!("project {project_id}"),
            |row| {
                Ok(WikiRecord {
                    id: row.get(0)?,
                    start_page: row.get(1)?,
                })
            },
        )
    }

    fn pages_by_wiki(&self, wiki_id: i64) -> Result<Vec<PageRecord>, ExportError> {
        debug!("listing pages for wiki {wiki_id}");
        // ORDER BY id pins the fetch order, which is canonical for the
        // navigation index and for run-to-run reproducibility.
        let mut stmt = self
            .conn
            .prepare("SELECT id, title FROM wiki_pages WHERE wiki_id = ?1 ORDER BY id")?;
        let rows = stmt.query_map(params![wiki_id], |row| {
            Ok(PageRecord {
                id: row.get(0)?,
                title: row.get(1)?,
            })
        })?;
        let mut pages = Vec::new();
        for row in rows {
            pages.push(row?);
        }
        Ok(pages)
    }

    fn content_by_page(&self, page: &PageRecord) -> Result<String, ExportError> {
        debug!("fetching content for page {} ('{}')", page.id, page.title);
        // NULL text is a present-but-empty body; a missing row is an error.
        let text: Option<String> = self.single_row(
            "SELECT text FROM wiki_contents WHERE page_id = ?1",
            params![page.id],
            "wiki content",
            page.title.clone(),
            |row| row.get(0),
        )?;
        Ok(text.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_source() -> SqliteSource {
        let conn = Connection::open_in_memory().expect("in-memory db");
        conn.execute_batch(
            "CREATE TABLE projects (id INTEGER PRIMARY KEY, name TEXT NOT NULL, identifier TEXT NOT NULL);
             CREATE TABLE wikis (id INTEGER PRIMARY KEY, project_id INTEGER NOT NULL, start_page TEXT NOT NULL);
             CREATE TABLE wiki_pages (id INTEGER PRIMARY KEY, wiki_id INTEGER NOT NULL, title TEXT NOT NULL);
             CREATE TABLE wiki_contents (id INTEGER PRIMARY KEY, page_id INTEGER NOT NULL, text TEXT);",
        )
        .expect("schema");
        SqliteSource::from_connection(conn)
    }

    #[test]
    fn project_lookup_returns_matching_row() {
        let source = memory_source();
        source
            .conn
            .execute(
                "INSERT INTO projects (id, name, identifier) VALUES (1, 'Demo', 'demo')",
                [],
            )
            .expect("insert");

        let project = source.project_by_identifier("demo").expect("project");
        assert_eq!(project.id, 1);
        assert_eq!(project.identifier, "demo");
        assert_eq!(project.name, "Demo");
    }

    #[test]
    fn missing_project_is_not_found() {
        let source = memory_source();
        let err = source.project_by_identifier("ghost").unwrap_err();
        assert!(matches!(
            err,
            ExportError::NotFound { what: "project", .. }
        ));
    }

    #[test]
    fn duplicate_identifier_is_ambiguous() {
        let source = memory_source();
        source
            .conn
            .execute_batch(
                "INSERT INTO projects (id, name, identifier) VALUES (1, 'A', 'demo');
                 INSERT INTO projects (id, name, identifier) VALUES (2, 'B', 'demo');",
            )
            .expect("insert");

        let err = source.project_by_identifier("demo").unwrap_err();
        assert!(matches!(
            err,
            ExportError::Ambiguous { what: "project", .. }
        ));
    }

    #[test]
    fn pages_come_back_in_id_order() {
        let source = memory_source();
        source
            .conn
            .execute_batch(
                "INSERT INTO wiki_pages (id, wiki_id, title) VALUES (3, 1, 'Third');
                 INSERT INTO wiki_pages (id, wiki_id, title) VALUES (1, 1, 'First');
                 INSERT INTO wiki_pages (id, wiki_id, title) VALUES (2, 1, 'Second');
                 INSERT INTO wiki_pages (id, wiki_id, title) VALUES (9, 2, 'Other wiki');",
            )
            .expect("insert");

        let pages = source.pages_by_wiki(1).expect("pages");
        let titles: Vec<&str> = pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn missing_content_row_names_the_page_title() {
        let source = memory_source();
        let page = PageRecord {
            id: 7,
            title: "Orphan".to_string(),
        };
        let err = source.content_by_page(&page).unwrap_err();
        match err {
            ExportError::NotFound { what, key } => {
                assert_eq!(what, "wiki content");
                assert_eq!(key, "Orphan");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn null_content_reads_as_empty_text() {
        let source = memory_source();
        source
            .conn
            .execute(
                "INSERT INTO wiki_contents (id, page_id, text) VALUES (1, 7, NULL)",
                [],
            )
            .expect("insert");
        let page = PageRecord {
            id: 7,
            title: "Blank".to_string(),
        };
        assert_eq!(source.content_by_page(&page).expect("content"), "");
    }
}
