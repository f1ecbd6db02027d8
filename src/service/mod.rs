// Client Service — Service Module
//
// The four client operations exposed to callers. Lookups go through
// `ClientReader`, creation through `ClientProvisioner`; both results are
// mapped to `ClientDto` here, at the boundary.

mod error;
mod models;
mod provisioner;
mod reader;

pub use error::ClientError;
pub use models::{ClientDto, ClientRequest};
pub use provisioner::ClientProvisioner;
pub use reader::ClientReader;

use uuid::Uuid;

use crate::credential::CredentialHasher;
use crate::store::ClientStore;

pub struct ClientService<S: ClientStore> {
    store: S,
    hasher: CredentialHasher,
}

impl<S: ClientStore> ClientService<S> {
    pub fn new(store: S, hasher: CredentialHasher) -> Self {
        Self { store, hasher }
    }

    fn reader(&self) -> ClientReader<'_, S> {
        ClientReader::new(&self.store)
    }

    fn provisioner(&self) -> ClientProvisioner<'_, S> {
        ClientProvisioner::new(&self.store, &self.hasher)
    }

    pub fn get_client_by_id(&self, id: &Uuid) -> Result<ClientDto, ClientError> {
        self.reader().get_by_id(id).map(ClientDto::from)
    }

    pub fn get_client_by_username(&self, username: &str) -> Result<ClientDto, ClientError> {
        self.reader().get_by_username(username).map(ClientDto::from)
    }

    pub fn get_all_clients(&self) -> Result<Vec<ClientDto>, ClientError> {
        let clients = self.reader().get_all()?;
        Ok(clients.into_iter().map(ClientDto::from).collect())
    }

    pub fn add_client(&self, request: ClientRequest) -> Result<ClientDto, ClientError> {
        self.provisioner().create_account(request).map(ClientDto::from)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
