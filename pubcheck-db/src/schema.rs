//! Publication store schema creation and open helpers.

use std::path::Path;

use rusqlite::Connection;

use crate::error::StoreError;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS publications (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    content_id TEXT NOT NULL,
    campaign_id TEXT NOT NULL,
    publisher_id TEXT NOT NULL,
    published_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_publications_content_id
    ON publications(content_id);
"#;

/// Open or create a publication store at the given path.
///
/// Schema creation is idempotent, so opening an existing store leaves its
/// rows untouched.
pub fn open_store(path: &Path) -> Result<Connection, StoreError> {
    let open_err = |source| StoreError::Open {
        path: path.display().to_string(),
        source,
    };

    let conn = Connection::open(path).map_err(open_err)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")
        .map_err(open_err)?;
    conn.execute_batch(SCHEMA_SQL).map_err(open_err)?;
    Ok(conn)
}

/// Open an in-memory store with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, StoreError> {
    let open_err = |source| StoreError::Open {
        path: ":memory:".to_string(),
        source,
    };

    let conn = Connection::open_in_memory().map_err(open_err)?;
    conn.execute_batch(SCHEMA_SQL).map_err(open_err)?;
    Ok(conn)
}
