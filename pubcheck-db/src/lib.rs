//! SQLite persistence layer for the publication ledger.
//!
//! Provides schema creation, the content-ID lookup, and the publication
//! insert, backed by SQLite (via rusqlite with bundled feature).

pub mod error;
pub mod operations;
pub mod queries;
pub mod schema;

pub use error::StoreError;
pub use operations::insert_publication;
pub use queries::{count_publications, find_by_content_id, PublicationEntry};
pub use schema::{open_memory, open_store};
