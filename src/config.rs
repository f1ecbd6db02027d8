// Client Service — Runtime configuration
//
// The database location comes from the environment (or the CLI), the Argon2id
// cost is fixed here. Nothing in the configuration is derived from request input.

use std::path::PathBuf;

/// Environment variable overriding the database location.
pub const DB_PATH_ENV: &str = "CLIENT_SERVICE_DB";

// Argon2id cost for stored client credentials.
// m=19456 (19 MiB), t=2 iterations, p=1 lane
const ARGON2_M_COST: u32 = 19_456;
const ARGON2_T_COST: u32 = 2;
const ARGON2_P_COST: u32 = 1;

/// Argon2id cost parameters used by `CredentialHasher`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingConfig {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: ARGON2_M_COST,
            iterations: ARGON2_T_COST,
            parallelism: ARGON2_P_COST,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub hashing: HashingConfig,
}

impl Config {
    /// Build the configuration from the environment, falling back to the
    /// platform data directory for the database.
    pub fn load() -> Self {
        let database_path = std::env::var_os(DB_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);

        Self {
            database_path,
            hashing: HashingConfig::default(),
        }
    }

    pub fn with_database_path(mut self, path: PathBuf) -> Self {
        self.database_path = path;
        self
    }
}

/// `<data dir>/client-service/clients.db`, or the working directory if the
/// platform has no data dir.
fn default_db_path() -> PathBuf {
    let base = dirs_next::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("client-service").join("clients.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hashing_cost_is_fixed() {
        let config = HashingConfig::default();
        assert_eq!(config.memory_kib, 19_456);
        assert_eq!(config.iterations, 2);
        assert_eq!(config.parallelism, 1);
    }

    #[test]
    fn test_default_db_path_ends_with_service_file() {
        let path = default_db_path();
        assert!(path.ends_with("client-service/clients.db"));
    }

    #[test]
    fn test_with_database_path_overrides_location() {
        let config = Config::load().with_database_path(PathBuf::from("/tmp/other.db"));
        assert_eq!(config.database_path, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.hashing, HashingConfig::default());
    }
}
