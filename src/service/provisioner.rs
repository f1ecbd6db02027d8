// Client Service — Account provisioning
//
// Order of checks for a new account:
//   1. username not already taken        -> DuplicateUsername
//   2. username satisfies policy         -> InvalidUsername
//   3. password satisfies policy         -> InvalidPassword
//   4. hash the password (Argon2id)
//   5. constrained insert                -> DuplicateUsername on conflict,
//                                           Persistence on anything else
// Steps 1-3 never write. Hashing runs only for requests that passed them.

use crate::credential::CredentialHasher;
use crate::policy;
use crate::store::{Client, ClientStore, NewClient};

use super::{ClientError, ClientRequest};

pub struct ClientProvisioner<'a, S: ClientStore> {
    store: &'a S,
    hasher: &'a CredentialHasher,
}

impl<'a, S: ClientStore> ClientProvisioner<'a, S> {
    pub fn new(store: &'a S, hasher: &'a CredentialHasher) -> Self {
        Self { store, hasher }
    }

    /// Create a client account from a plaintext request.
    pub fn create_account(&self, request: ClientRequest) -> Result<Client, ClientError> {
        let ClientRequest { username, password } = request;

        if self.store.find_by_username(&username)?.is_some() {
            tracing::debug!(username = %username, "Rejected: username already taken");
            return Err(ClientError::DuplicateUsername(username));
        }

        if !policy::is_valid_username(&username) {
            tracing::debug!(username = %username, "Rejected: username fails policy");
            return Err(ClientError::InvalidUsername);
        }

        if !policy::is_valid_password(&password) {
            tracing::debug!(username = %username, "Rejected: password fails policy");
            return Err(ClientError::InvalidPassword);
        }

        let password_hash = self.hasher.hash(&password)?;
        drop(password);

        let client = self
            .store
            .insert(NewClient {
                username,
                password_hash,
            })
            .inspect_err(|e| {
                tracing::warn!(error = %e, "Client insert failed");
            })?;

        tracing::info!(client = %client, "Client account created");

        Ok(client)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
