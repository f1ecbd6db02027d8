// Client Service — Store Module
//
// SQLite-backed persistence for client accounts. Usernames are unique at the
// schema level, so the insert itself is the authoritative uniqueness check.

mod db;
mod error;
mod models;
mod repository;

pub use db::Database;
pub use error::StoreError;
pub use models::{Client, NewClient};
pub use repository::{ClientStore, SqliteClientStore};
