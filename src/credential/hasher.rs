// Client Service — Credential Hasher
//
// Turns a plaintext password into an Argon2id PHC string:
//   $argon2id$v=19$m=<mem>,t=<iter>,p=<lanes>$<salt>$<hash>
//
// A fresh random salt is drawn for every call, so hashing the same password
// twice yields two different strings that both verify. Cost parameters are
// taken from `HashingConfig` once, when the hasher is built.

use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;

use super::CredentialError;
use crate::config::HashingConfig;

/// Length of the random salt in bytes.
const SALT_LEN: usize = 16;

/// Argon2id hasher bound to a fixed cost configuration.
#[derive(Clone)]
pub struct CredentialHasher {
    params: Params,
}

impl CredentialHasher {
    /// Build a hasher, rejecting cost parameters Argon2 would not accept.
    pub fn new(config: HashingConfig) -> Result<Self, CredentialError> {
        let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
            .map_err(|e| CredentialError::InvalidParams(e.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a password with a fresh salt. Returns the PHC-encoded credential.
    pub fn hash(&self, password: &str) -> Result<String, CredentialError> {
        let mut salt_bytes = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt_bytes);
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| CredentialError::Hash(e.to_string()))?;

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CredentialError::Hash(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Check a password against a stored credential. The cost parameters
    /// encoded in the credential are used, not the hasher's own.
    pub fn verify(&self, password: &str, credential: &str) -> Result<bool, CredentialError> {
        let parsed =
            PasswordHash::new(credential).map_err(|e| CredentialError::Malformed(e.to_string()))?;

        match self.argon2().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(CredentialError::Hash(e.to_string())),
        }
    }
}

impl std::fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialHasher")
            .field("m_cost", &self.params.m_cost())
            .field("t_cost", &self.params.t_cost())
            .field("p_cost", &self.params.p_cost())
            .finish()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
