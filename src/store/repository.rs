// Client Service — Client Store Repository
//
// Lookup and insert operations on the `clients` table. `insert` relies on the
// UNIQUE constraint on `username`: a violation is reported as
// `StoreError::UsernameConflict`, distinct from any other database failure.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, OptionalExtension};
use uuid::Uuid;

use super::db::Database;
use super::models::{Client, NewClient};
use super::StoreError;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over client account storage.
pub trait ClientStore {
    /// Find a client by its store-assigned identifier.
    fn find_by_id(&self, id: &Uuid) -> Result<Option<Client>, StoreError>;

    /// Find a client by exact (case-sensitive) username.
    fn find_by_username(&self, username: &str) -> Result<Option<Client>, StoreError>;

    /// All clients, oldest first. May be empty.
    fn find_all(&self) -> Result<Vec<Client>, StoreError>;

    /// Insert a new client. Fails with `UsernameConflict` if the username is
    /// already taken at the moment of the write.
    fn insert(&self, client: NewClient) -> Result<Client, StoreError>;
}

// ─── SQLite Implementation ──────────────────────────────────────────────────

const SELECT_COLUMNS: &str = "SELECT id, username, password, created_at FROM clients";

pub struct SqliteClientStore<'a> {
    db: &'a Database,
}

impl<'a> SqliteClientStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Parse a client row from the database.
    fn row_to_client(row: &rusqlite::Row<'_>) -> rusqlite::Result<Client> {
        let id_str: String = row.get(0)?;
        let username: String = row.get(1)?;
        let password: String = row.get(2)?;
        let created_at_str: String = row.get(3)?;

        let id = Uuid::parse_str(&id_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
            })?;

        Ok(Client::new(id, username, password, created_at))
    }

    fn find_one(&self, column: &str, value: &str) -> Result<Option<Client>, StoreError> {
        let sql = format!("{} WHERE {} = ?1", SELECT_COLUMNS, column);
        let client = self
            .db
            .conn()
            .query_row(&sql, params![value], Self::row_to_client)
            .optional()?;
        Ok(client)
    }
}

fn is_username_conflict(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, Some(msg))
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                && msg.contains("clients.username")
    )
}

impl<'a> ClientStore for SqliteClientStore<'a> {
    fn find_by_id(&self, id: &Uuid) -> Result<Option<Client>, StoreError> {
        self.find_one("id", &id.to_string())
    }

    fn find_by_username(&self, username: &str) -> Result<Option<Client>, StoreError> {
        self.find_one("username", username)
    }

    fn find_all(&self) -> Result<Vec<Client>, StoreError> {
        let sql = format!("{} ORDER BY created_at ASC, rowid ASC", SELECT_COLUMNS);
        let mut stmt = self.db.conn().prepare(&sql)?;

        let rows = stmt.query_map([], Self::row_to_client)?;

        let mut clients = Vec::new();
        for row in rows {
            clients.push(row?);
        }

        Ok(clients)
    }

    fn insert(&self, client: NewClient) -> Result<Client, StoreError> {
        let id = Uuid::new_v4();
        let created_at = Utc::now();

        let result = self.db.conn().execute(
            "INSERT INTO clients (id, username, password, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                id.to_string(),
                client.username,
                client.password_hash,
                created_at.to_rfc3339_opts(SecondsFormat::Nanos, true),
            ],
        );

        match result {
            Ok(_) => {}
            Err(e) if is_username_conflict(&e) => {
                return Err(StoreError::UsernameConflict(client.username));
            }
            Err(e) => return Err(StoreError::Database(e)),
        }

        tracing::debug!(client_id = %id, username = %client.username, "Client row inserted");

        Ok(Client::new(id, client.username, client.password_hash, created_at))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn new_client(username: &str) -> NewClient {
        NewClient {
            username: username.to_string(),
            password_hash: format!("$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ${}", username),
        }
    }

    #[test]
    fn test_insert_assigns_uuid_and_timestamp() {
        let db = Database::open_in_memory().unwrap();
        let store = SqliteClientStore::new(&db);

        let before = Utc::now();
        let client = store.insert(new_client("alice")).unwrap();

        assert_eq!(client.id.get_version(), Some(uuid::Version::Random));
        assert_eq!(client.username, "alice");
        assert!(client.created_at >= before);
    }

    #[test]
    fn test_find_by_id_returns_inserted_record() {
        let db = Database::open_in_memory().unwrap();
        let store = SqliteClientStore::new(&db);

        let inserted = store.insert(new_client("alice")).unwrap();
        let found = store
            .find_by_id(&inserted.id)
            .unwrap()
            .expect("Client should exist");

        assert_eq!(found.id, inserted.id);
        assert_eq!(found.username, "alice");
        assert_eq!(found.password(), inserted.password());
        assert_eq!(found.created_at.timestamp_micros(), inserted.created_at.timestamp_micros());
    }

    #[test]
    fn test_find_by_id_nonexistent_returns_none() {
        let db = Database::open_in_memory().unwrap();
        let store = SqliteClientStore::new(&db);

        assert!(store.find_by_id(&Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_find_by_username_is_case_sensitive() {
        let db = Database::open_in_memory().unwrap();
        let store = SqliteClientStore::new(&db);

        store.insert(new_client("alice")).unwrap();

        assert!(store.find_by_username("alice").unwrap().is_some());
        assert!(store.find_by_username("Alice").unwrap().is_none());
        assert!(store.find_by_username("bob").unwrap().is_none());
    }

    #[test]
    fn test_find_all_returns_every_client_in_insert_order() {
        let db = Database::open_in_memory().unwrap();
        let store = SqliteClientStore::new(&db);

        assert!(store.find_all().unwrap().is_empty());

        for name in &["alice", "bob", "carol"] {
            store.insert(new_client(name)).unwrap();
        }

        let names: Vec<String> = store
            .find_all()
            .unwrap()
            .into_iter()
            .map(|c| c.username)
            .collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_insert_duplicate_username_reports_conflict() {
        let db = Database::open_in_memory().unwrap();
        let store = SqliteClientStore::new(&db);

        store.insert(new_client("alice")).unwrap();
        let err = store.insert(new_client("alice")).unwrap_err();

        match err {
            StoreError::UsernameConflict(name) => assert_eq!(name, "alice"),
            other => panic!("Expected UsernameConflict, got {:?}", other),
        }

        let count: i64 = db
            .conn()
            .query_row("SELECT count(*) FROM clients", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1, "Conflicting insert must not leave a row behind");
    }

    #[test]
    fn test_insert_other_failure_is_database_error() {
        let db = Database::open_in_memory().unwrap();
        db.conn().execute_batch("DROP TABLE clients;").unwrap();
        let store = SqliteClientStore::new(&db);

        let err = store.insert(new_client("alice")).unwrap_err();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[test]
    fn test_corrupt_id_surfaces_as_error() {
        let db = Database::open_in_memory().unwrap();
        db.conn()
            .execute(
                "INSERT INTO clients (id, username, password, created_at)
                 VALUES ('not-a-uuid', 'alice', 'hash', '2024-01-01T00:00:00Z')",
                [],
            )
            .unwrap();
        let store = SqliteClientStore::new(&db);

        assert!(store.find_by_username("alice").is_err());
        assert!(store.find_all().is_err());
    }
}
