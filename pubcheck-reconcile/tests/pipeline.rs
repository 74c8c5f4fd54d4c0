//! End-to-end run of the reconciliation workflow: parse a manifest file,
//! classify against a seeded store, gate on confirmation, publish.

use std::fs;
use std::io::Cursor;

use pubcheck_db::{count_publications, find_by_content_id, insert_publication, open_memory};
use pubcheck_manifest::parse_manifest;
use pubcheck_reconcile::{
    classify, publish_records, read_confirmation, Category, Confirmation,
};
use tempfile::TempDir;

fn seeded_store() -> rusqlite::Connection {
    let conn = open_memory().unwrap();
    // bafy1 already published by this campaign and publisher, bafy2 by a
    // different campaign. bafy3 is absent.
    insert_publication(&conn, "bafy1", "c-001", "p-001").unwrap();
    insert_publication(&conn, "bafy2", "c-777", "p-009").unwrap();
    conn
}

#[test]
fn confirmed_run_publishes_the_whole_manifest() {
    let tmp = TempDir::new().unwrap();
    let manifest_path = tmp.path().join("batch.txt");
    fs::write(
        &manifest_path,
        "bafy1 bag1 100 90\nbafy2 bag2 200 180\nbafy3 bag3 300 270\nshort line\n",
    )
    .unwrap();

    let conn = seeded_store();
    let records = parse_manifest(&manifest_path).unwrap();
    assert_eq!(records.len(), 3);

    let classification = classify(&conn, &records, "c-001", "p-001", None).unwrap();
    assert_eq!(classification.ids_for(Category::AlreadyPublished), ["bafy1"]);
    assert_eq!(classification.ids_for(Category::OtherCampaign), ["bafy2"]);
    assert_eq!(classification.ids_for(Category::New), ["bafy3"]);

    let mut answer = Cursor::new("yes\n");
    let inserted = match read_confirmation(&mut answer) {
        Confirmation::Proceed => publish_records(&conn, &records, "c-001", "p-001").unwrap(),
        Confirmation::Abort => 0,
    };

    // All three records are saved, including the two flagged ones.
    assert_eq!(inserted, 3);
    assert_eq!(count_publications(&conn).unwrap(), 5);
    assert_eq!(find_by_content_id(&conn, "bafy1").unwrap().len(), 2);
}

#[test]
fn declined_run_leaves_the_store_untouched() {
    let tmp = TempDir::new().unwrap();
    let manifest_path = tmp.path().join("batch.txt");
    fs::write(&manifest_path, "bafy3 bag3 300 270\n").unwrap();

    let conn = seeded_store();
    let records = parse_manifest(&manifest_path).unwrap();
    classify(&conn, &records, "c-001", "p-001", None).unwrap();

    let mut answer = Cursor::new("no\n");
    if let Confirmation::Proceed = read_confirmation(&mut answer) {
        publish_records(&conn, &records, "c-001", "p-001").unwrap();
    }

    assert_eq!(count_publications(&conn).unwrap(), 2);
    assert!(find_by_content_id(&conn, "bafy3").unwrap().is_empty());
}
