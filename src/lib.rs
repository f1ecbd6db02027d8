// Client Service — Library root
//
// Re-exports the store, policy, credential, service, config and CLI modules.

pub mod cli;
pub mod config;
pub mod credential;
pub mod error;
pub mod policy;
pub mod service;
pub mod store;

pub use error::{ClientServiceError, Result};
pub use service::{ClientDto, ClientError, ClientRequest, ClientService};
