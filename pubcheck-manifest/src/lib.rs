//! Manifest data model and parsing.
//!
//! This crate defines the manifest record type and the line-oriented parser
//! for manifest files without any database dependencies. Consumers pass the
//! parsed records to `pubcheck-reconcile` for classification and to
//! `pubcheck-db` for persistence.

pub mod parse;
pub mod types;

pub use parse::{parse_manifest, ManifestError};
pub use types::ManifestRecord;
