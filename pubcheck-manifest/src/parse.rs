//! Line-oriented parsing of whitespace-delimited manifest files.
//!
//! Each line carries at least four whitespace-separated fields: content ID,
//! payload ID, size, archive size. Lines with fewer fields are skipped,
//! fields past the fourth are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::types::ManifestRecord;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Parse a manifest file into records, preserving line order.
///
/// Malformed lines produce no record and no error. Repeated content IDs are
/// kept as separate records, one per line.
pub fn parse_manifest(path: &Path) -> Result<Vec<ManifestRecord>, ManifestError> {
    let file = File::open(path).map_err(|e| ManifestError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut records = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| ManifestError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        if let Some(record) = parse_line(&line) {
            records.push(record);
        }
    }

    Ok(records)
}

/// Split one manifest line into a record, or `None` if it has fewer than
/// four fields.
fn parse_line(line: &str) -> Option<ManifestRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        if !fields.is_empty() {
            log::debug!("Skipping short manifest line: {line:?}");
        }
        return None;
    }

    Some(ManifestRecord {
        content_id: fields[0].to_string(),
        payload_id: fields[1].to_string(),
        size: fields[2].to_string(),
        archive_size: fields[3].to_string(),
    })
}
