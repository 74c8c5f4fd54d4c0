//! Read queries for the publication store.

use rusqlite::{params, Connection};

use crate::error::StoreError;

/// One prior publication row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationEntry {
    /// Content-derived identifier of the published unit.
    pub content_id: String,
    /// Campaign the unit was published under.
    pub campaign_id: String,
    /// Publisher that published the unit.
    pub publisher_id: String,
}

/// Find all publication entries for a content ID, in store order.
///
/// Returns an empty vec when the content ID has never been published.
pub fn find_by_content_id(
    conn: &Connection,
    content_id: &str,
) -> Result<Vec<PublicationEntry>, StoreError> {
    let mut stmt = conn
        .prepare(
            "SELECT content_id, campaign_id, publisher_id
             FROM publications WHERE content_id = ?1",
        )
        .map_err(StoreError::Query)?;
    let rows = stmt
        .query_map(params![content_id], |row| {
            Ok(PublicationEntry {
                content_id: row.get(0)?,
                campaign_id: row.get(1)?,
                publisher_id: row.get(2)?,
            })
        })
        .map_err(StoreError::Query)?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::Query)
}

/// Count all rows in the publications table.
pub fn count_publications(conn: &Connection) -> Result<usize, StoreError> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM publications", [], |row| row.get(0))
        .map_err(StoreError::Query)?;
    Ok(count as usize)
}
