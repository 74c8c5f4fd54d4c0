//! Manifest record type.

/// One publishable unit, read from a single manifest line.
///
/// All four fields are carried as the literal text found in the file. The
/// two size fields are never interpreted numerically anywhere in the
/// pipeline, so they stay strings end to end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    /// Content-derived identifier of the packaged unit.
    pub content_id: String,
    /// Identifier of the source payload the unit was built from.
    pub payload_id: String,
    /// Reported payload size.
    pub size: String,
    /// Reported size of the packaged archive.
    pub archive_size: String,
}
