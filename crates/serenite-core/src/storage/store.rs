//! Named-record persistence.
//!
//! The store is a flat namespace of JSON documents: the journal
//! sequence, the day-bucketed exercise completions, and a reserved
//! progress record. Backed by a SQLite key/value table on disk, or by
//! an in-memory map for tests and degraded operation.

use rusqlite::{params, Connection};
use serde_json::Value;
use std::collections::HashMap;

use super::data_dir;
use crate::error::StorageError;

/// Persistence seam for named JSON records.
///
/// Implementations must tolerate unknown keys (`Ok(None)`) and report
/// undecodable payloads as `Corrupt` so callers can fall back to
/// defaults.
pub trait Storage {
    fn read_named(&self, key: &str) -> Result<Option<Value>, StorageError>;
    fn write_named(&mut self, key: &str, value: &Value) -> Result<(), StorageError>;
}

/// SQLite-backed store at `~/.config/serenite/serenite.db`.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store, creating the database and schema if needed.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, StorageError> {
        let dir = data_dir().map_err(|e| StorageError::Unavailable {
            key: "data_dir".into(),
            message: e.to_string(),
        })?;
        let path = dir.join("serenite.db");
        let conn = Connection::open(&path)
            .map_err(|source| StorageError::OpenFailed { path, source })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|source| StorageError::OpenFailed {
            path: ":memory:".into(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS records (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );",
            )
            .map_err(|e| StorageError::Unavailable {
                key: "records".into(),
                message: e.to_string(),
            })
    }
}

impl Storage for SqliteStore {
    fn read_named(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM records WHERE key = ?1")
            .map_err(|e| unavailable(key, &e))?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(raw) => {
                let value =
                    serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt {
                        key: key.to_string(),
                        message: e.to_string(),
                    })?;
                Ok(Some(value))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(unavailable(key, &e)),
        }
    }

    fn write_named(&mut self, key: &str, value: &Value) -> Result<(), StorageError> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO records (key, value) VALUES (?1, ?2)",
                params![key, value.to_string()],
            )
            .map_err(|e| unavailable(key, &e))?;
        Ok(())
    }
}

fn unavailable(key: &str, err: &rusqlite::Error) -> StorageError {
    StorageError::Unavailable {
        key: key.to_string(),
        message: err.to_string(),
    }
}

/// In-memory store. Used as the degraded fallback when the database
/// cannot be opened, and as a test double (optionally failing writes).
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, Value>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, for exercising the
    /// best-effort persistence path.
    pub fn failing() -> Self {
        Self {
            records: HashMap::new(),
            fail_writes: true,
        }
    }

    /// Seed a named record directly, bypassing the trait.
    pub fn seed(&mut self, key: &str, value: Value) {
        self.records.insert(key.to_string(), value);
    }
}

impl Storage for MemoryStore {
    fn read_named(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.records.get(key).cloned())
    }

    fn write_named(&mut self, key: &str, value: &Value) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable {
                key: key.to_string(),
                message: "writes disabled".into(),
            });
        }
        self.records.insert(key.to_string(), value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sqlite_read_write_roundtrip() {
        let mut store = SqliteStore::open_memory().unwrap();
        assert!(store.read_named("journal").unwrap().is_none());
        store.write_named("journal", &json!([{"anxiety": 4}])).unwrap();
        let value = store.read_named("journal").unwrap().unwrap();
        assert_eq!(value[0]["anxiety"], 4);
    }

    #[test]
    fn sqlite_reports_corrupt_payload() {
        let mut store = SqliteStore::open_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO records (key, value) VALUES ('journal', 'not json')",
                [],
            )
            .unwrap();
        assert!(matches!(
            store.read_named("journal"),
            Err(StorageError::Corrupt { .. })
        ));
    }

    #[test]
    fn failing_memory_store_rejects_writes() {
        let mut store = MemoryStore::failing();
        assert!(store.write_named("journal", &json!([])).is_err());
        assert!(store.read_named("journal").unwrap().is_none());
    }
}
