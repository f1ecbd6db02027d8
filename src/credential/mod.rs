// Client Service — Credential Module
//
// One-way Argon2id hashing of client passwords. Only the PHC-encoded hash is
// ever handed to the store.

mod error;
mod hasher;

pub use error::CredentialError;
pub use hasher::CredentialHasher;
