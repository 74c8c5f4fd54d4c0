use thiserror::Error;

use pubcheck_db::StoreError;
use pubcheck_manifest::ManifestError;

/// Errors that end a pubcheck run.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Manifest file could not be read
    #[error("{0}")]
    Manifest(#[from] ManifestError),

    /// Publication store failure
    #[error("{0}")]
    Store(#[from] StoreError),
}
