// Client Service — Stored client records
//
// `Client` is the row as persisted. The `password` column only ever holds an
// Argon2id PHC string; it is still kept private and out of Debug output.

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// A persisted client account.
pub struct Client {
    pub id: Uuid,
    pub username: String,
    /// Hashed credential, never the plaintext password
    password: String,
    pub created_at: DateTime<Utc>,
}

impl Client {
    pub fn new(id: Uuid, username: String, password: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username,
            password,
            created_at,
        }
    }

    /// The stored credential (PHC string).
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.username)
    }
}

/// Input for `ClientStore::insert`. The id and timestamp are assigned by the store.
pub struct NewClient {
    pub username: String,
    pub password_hash: String,
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Client {
        Client::new(
            Uuid::new_v4(),
            "alice".to_string(),
            "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn test_client_debug_redacts_password() {
        let debug_output = format!("{:?}", sample());
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("$argon2id$"));
    }

    #[test]
    fn test_client_display_shows_username_only() {
        let client = sample();
        let display_output = format!("{}", client);
        assert!(display_output.contains("alice"));
        assert!(display_output.contains(&client.id.to_string()));
        assert!(!display_output.contains("argon2"));
    }

    #[test]
    fn test_password_accessor_returns_stored_credential() {
        assert!(sample().password().starts_with("$argon2id$"));
    }
}
