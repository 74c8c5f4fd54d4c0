use pubcheck_db::{count_publications, find_by_content_id, open_memory, StoreError};
use pubcheck_manifest::ManifestRecord;
use pubcheck_reconcile::publish_records;

fn record(content_id: &str) -> ManifestRecord {
    ManifestRecord {
        content_id: content_id.to_string(),
        payload_id: format!("bag-{content_id}"),
        size: "1024".to_string(),
        archive_size: "512".to_string(),
    }
}

#[test]
fn publish_inserts_all_records_in_manifest_order() {
    let conn = open_memory().unwrap();
    let records = [record("bafy1"), record("bafy2"), record("bafy1")];

    let inserted = publish_records(&conn, &records, "c-001", "p-001").unwrap();
    assert_eq!(inserted, 3);

    let mut stmt = conn
        .prepare("SELECT content_id FROM publications ORDER BY id")
        .unwrap();
    let ids: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(ids, ["bafy1", "bafy2", "bafy1"]);
}

#[test]
fn publish_does_not_deduplicate_against_the_store() {
    let conn = open_memory().unwrap();
    pubcheck_db::insert_publication(&conn, "bafy1", "c-001", "p-001").unwrap();

    let records = [record("bafy1")];
    publish_records(&conn, &records, "c-001", "p-001").unwrap();

    let entries = find_by_content_id(&conn, "bafy1").unwrap();
    assert_eq!(entries.len(), 2);
}

#[test]
fn publishing_the_same_manifest_twice_doubles_rows() {
    let conn = open_memory().unwrap();
    let records = [record("bafy1"), record("bafy2")];

    publish_records(&conn, &records, "c-001", "p-001").unwrap();
    publish_records(&conn, &records, "c-001", "p-001").unwrap();

    assert_eq!(count_publications(&conn).unwrap(), 4);
}

#[test]
fn publish_empty_manifest_is_a_noop() {
    let conn = open_memory().unwrap();
    let inserted = publish_records(&conn, &[], "c-001", "p-001").unwrap();
    assert_eq!(inserted, 0);
    assert_eq!(count_publications(&conn).unwrap(), 0);
}

#[test]
fn failed_insert_keeps_earlier_rows() {
    let conn = open_memory().unwrap();
    conn.execute_batch(
        "CREATE TRIGGER reject_poison BEFORE INSERT ON publications
         WHEN NEW.content_id = 'poison'
         BEGIN
             SELECT RAISE(ABORT, 'rejected by test trigger');
         END;",
    )
    .unwrap();

    let records = [record("bafy1"), record("bafy2"), record("poison"), record("bafy3")];
    let err = publish_records(&conn, &records, "c-001", "p-001").unwrap_err();
    assert!(matches!(err, StoreError::Insert(_)));

    // The two rows before the failure stay; nothing after it runs.
    assert_eq!(count_publications(&conn).unwrap(), 2);
    assert!(find_by_content_id(&conn, "bafy3").unwrap().is_empty());
}
