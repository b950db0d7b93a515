//! Durable key-value blob store.
//!
//! The whole application state is serialized to JSON and written into a
//! named slot of a small SQLite kv table. Consumers treat the store as
//! an opaque blob slot: `get`/`set`/`delete` by name, nothing else.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::error::{Result, StorageError};

/// Slot holding the serialized [`crate::store::AppState`] snapshot.
pub const SLOT_APP_STATE: &str = "app_state";
/// First-run seeding marker. Survives independently of `app_state` so a
/// user who clears their data is not re-seeded with the demo set.
pub const SLOT_SEEDED: &str = "seeded_v1";
/// Signed-in identity blob, kept separate from the app state.
pub const SLOT_AUTH_SESSION: &str = "auth_session";
/// Serialized timer engine, persisted across CLI invocations.
pub const SLOT_TIMER: &str = "timer_engine";

/// SQLite-backed blob store.
pub struct BlobStore {
    conn: Connection,
}

impl BlobStore {
    /// Open the blob store at `~/.config/focusdeck/focusdeck.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = super::data_dir()?.join("focusdeck.db");
        Self::open_at(&path)
    }

    /// Open the blob store at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests).
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(StorageError::from)?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Read a slot, `None` if it was never written.
    pub fn get(&self, slot: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv WHERE key = ?1")
            .map_err(StorageError::from)?;
        match stmt.query_row(params![slot], |row| row.get::<_, String>(0)) {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StorageError::from(e).into()),
        }
    }

    /// Write a slot, replacing any previous value.
    pub fn set(&self, slot: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
                params![slot, value],
            )
            .map_err(StorageError::from)?;
        Ok(())
    }

    /// Remove a slot. No-op if absent.
    pub fn delete(&self, slot: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![slot])
            .map_err(StorageError::from)?;
        Ok(())
    }
}
