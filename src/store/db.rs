// Client Service — SQLite Database Management
//
// Opens the client database and brings the schema up to date. Every
// connection gets a busy timeout so that writers on separate connections
// queue on the file lock and then see the username constraint, rather than
// bailing out with SQLITE_BUSY.

use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;

use super::StoreError;

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Wrapper around a SQLite connection holding the `clients` table.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;

        let db = Self { conn };
        db.run_migrations()?;

        tracing::debug!(path = %path.display(), "Client database opened");
        Ok(db)
    }

    /// Open an in-memory database (for testing only).
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.run_migrations()?;
        Ok(db)
    }

    /// Get a reference to the underlying connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Run schema migrations to create or update tables.
    fn run_migrations(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS clients (
                id          TEXT PRIMARY KEY,
                username    TEXT NOT NULL UNIQUE,
                password    TEXT NOT NULL,
                created_at  TEXT NOT NULL
            );
            ",
        )?;

        tracing::debug!("Database migrations completed successfully");
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory_succeeds() {
        let db = Database::open_in_memory();
        assert!(db.is_ok(), "Should be able to open an in-memory database");
    }

    #[test]
    fn test_schema_migration_creates_clients_table() {
        let db = Database::open_in_memory().unwrap();

        let count: i64 = db
            .conn()
            .query_row(
                "SELECT count(*) FROM sqlite_master WHERE type='table' AND name='clients'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1, "clients table should exist");
    }

    #[test]
    fn test_schema_migration_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        assert!(
            db.run_migrations().is_ok(),
            "Migrations should be idempotent"
        );
    }

    #[test]
    fn test_username_column_is_unique() {
        let db = Database::open_in_memory().unwrap();
        let insert = "INSERT INTO clients (id, username, password, created_at)
                      VALUES (?1, 'alice', 'hash', '2024-01-01T00:00:00Z')";

        db.conn().execute(insert, ["id-1"]).unwrap();
        let second = db.conn().execute(insert, ["id-2"]);
        assert!(second.is_err(), "A second row with the same username must be rejected");
    }

    #[test]
    fn test_file_database_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clients.db");

        {
            let db = Database::open(&path).unwrap();
            db.conn()
                .execute(
                    "INSERT INTO clients (id, username, password, created_at)
                     VALUES ('id-1', 'alice', 'hash', '2024-01-01T00:00:00Z')",
                    [],
                )
                .unwrap();
        }

        let db = Database::open(&path).unwrap();
        let count: i64 = db
            .conn()
            .query_row("SELECT count(*) FROM clients", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
