// Client Service — Credential error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParams(String),

    #[error("Argon2id hash failed: {0}")]
    Hash(String),

    #[error("Stored credential is not a valid PHC string: {0}")]
    Malformed(String),
}
