// Client Service — Request and response shapes
//
// `ClientRequest` carries the plaintext password for the length of one
// `add_client` call and wipes it on drop. `ClientDto` is what callers get
// back; its `password` field only ever holds the hashed credential.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::store::Client;

/// Input to account creation.
pub struct ClientRequest {
    pub username: String,
    pub password: Zeroizing<String>,
}

impl ClientRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

impl fmt::Debug for ClientRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// External representation of a client account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDto {
    pub id: Uuid,
    pub username: String,
    /// Argon2id PHC string
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            password: client.password().to_string(),
            username: client.username,
            created_at: client.created_at,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
