// Client Service — Read-only client lookups
//
// Absence is never returned as `None` or an empty list: every lookup that
// finds nothing fails with `ClientError::NotFound`, including listing an
// empty store.

use uuid::Uuid;

use crate::store::{Client, ClientStore};

use super::ClientError;

pub struct ClientReader<'a, S: ClientStore> {
    store: &'a S,
}

impl<'a, S: ClientStore> ClientReader<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn get_by_id(&self, id: &Uuid) -> Result<Client, ClientError> {
        self.store
            .find_by_id(id)?
            .ok_or_else(|| ClientError::NotFound(format!("no client with id {}", id)))
    }

    pub fn get_by_username(&self, username: &str) -> Result<Client, ClientError> {
        self.store
            .find_by_username(username)?
            .ok_or_else(|| ClientError::NotFound(format!("no client with username {}", username)))
    }

    /// Every stored client. An empty store is reported as `NotFound`.
    pub fn get_all(&self) -> Result<Vec<Client>, ClientError> {
        let clients = self.store.find_all()?;
        if clients.is_empty() {
            return Err(ClientError::NotFound("there are no clients".to_string()));
        }
        Ok(clients)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
