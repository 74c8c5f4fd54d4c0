//! Record manifest entries as published.

use pubcheck_db::{insert_publication, StoreError};
use pubcheck_manifest::ManifestRecord;
use rusqlite::Connection;

/// Insert every manifest record into the publication store under the given
/// campaign and publisher.
///
/// Inserts run one at a time in manifest order with no surrounding
/// transaction: the first failure aborts the rest, and rows inserted before
/// it stay in the store. Nothing is deduplicated here; records the
/// classifier flagged as already published are inserted again.
pub fn publish_records(
    conn: &Connection,
    records: &[ManifestRecord],
    campaign_id: &str,
    publisher_id: &str,
) -> Result<usize, StoreError> {
    let mut inserted = 0;
    for record in records {
        insert_publication(conn, &record.content_id, campaign_id, publisher_id)?;
        inserted += 1;
    }
    Ok(inserted)
}
