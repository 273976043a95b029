//! Snapshot adapter error types.

use assistbridge_domain::error::AssistError;

/// Errors raised while loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("failed to read snapshot file")]
    Io(#[from] std::io::Error),

    /// The snapshot is not valid JSON or does not match the expected layout.
    #[error("failed to parse snapshot")]
    Parse(#[from] serde_json::Error),

    /// A record violates a domain invariant.
    #[error("invalid snapshot record")]
    Domain(#[source] AssistError),
}

impl SnapshotError {
    /// Convert into a [`AssistError`] for propagation across port boundaries.
    pub fn into_domain(self) -> AssistError {
        match self {
            Self::Domain(err) => err,
            other => AssistError::Storage(Box::new(other)),
        }
    }
}

impl From<SnapshotError> for AssistError {
    fn from(err: SnapshotError) -> Self {
        err.into_domain()
    }
}
