// Client Service — Top-level error types
//
// Aggregates errors from the service, store and credential modules into a
// single error enum for the application boundary.

use thiserror::Error;

/// Top-level error type for the client service binary.
#[derive(Debug, Error)]
pub enum ClientServiceError {
    #[error(transparent)]
    Client(#[from] crate::service::ClientError),

    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("Credential error: {0}")]
    Credential(#[from] crate::credential::CredentialError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ClientServiceError>;
