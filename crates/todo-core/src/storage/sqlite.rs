//! SQLite-backed local storage.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use super::Storage;
use crate::error::{Result, StorageResultExt};

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS local_storage (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
)";
const SELECT_ITEM_SQL: &str = "SELECT value FROM local_storage WHERE key = ?1";
const UPSERT_ITEM_SQL: &str = "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value";

/// Key/value storage in a single SQLite table.
pub struct SqliteStorage {
    connection: Connection,
}

impl SqliteStorage {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).storage_context("Failed to open storage database")?;
        Self::with_connection(connection)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory()
            .storage_context("Failed to open in-memory storage database")?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self> {
        connection
            .execute_batch(SCHEMA_SQL)
            .storage_context("Failed to initialize storage schema")?;
        Ok(Self { connection })
    }
}

impl Storage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_ITEM_SQL, params![key], |row| row.get(0))
            .optional()
            .storage_context("Failed to read storage item")
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_ITEM_SQL, params![key, value])
            .storage_context("Failed to write storage item")?;
        Ok(())
    }
}
