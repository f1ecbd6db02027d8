// Client Service — Store error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The UNIQUE constraint on `clients.username` rejected the write.
    #[error("Username already taken: {0}")]
    UsernameConflict(String),
}
