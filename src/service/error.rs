// Client Service — Client operation errors
//
// Every failure of the four client operations surfaces as one of these.
// Store conflicts on the username fold into `DuplicateUsername`; any other
// store failure keeps its cause inside `Persistence`.

use thiserror::Error;

use crate::credential::CredentialError;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("The username has already been taken: {0}")]
    DuplicateUsername(String),

    #[error("The username is not valid")]
    InvalidUsername,

    #[error("The password is not valid")]
    InvalidPassword,

    #[error("Persistence failure: {0}")]
    Persistence(#[source] StoreError),

    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),
}

impl From<StoreError> for ClientError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UsernameConflict(username) => ClientError::DuplicateUsername(username),
            other => ClientError::Persistence(other),
        }
    }
}
