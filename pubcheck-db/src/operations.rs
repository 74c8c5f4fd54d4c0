//! Write operations for the publication store.

use rusqlite::{params, Connection};

use crate::error::StoreError;

/// Insert one publication row.
///
/// No uniqueness is enforced; inserting a content ID that already has rows
/// adds another row beside them. `published_at` is filled in by the schema
/// default.
pub fn insert_publication(
    conn: &Connection,
    content_id: &str,
    campaign_id: &str,
    publisher_id: &str,
) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO publications (content_id, campaign_id, publisher_id)
         VALUES (?1, ?2, ?3)",
        params![content_id, campaign_id, publisher_id],
    )
    .map_err(StoreError::Insert)?;
    Ok(())
}
