//! Board blob store contracts and implementations.
//!
//! # Responsibility
//! - Provide `load`/`save` of opaque board payloads keyed by name.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `save` replaces any previous payload for the same key.
//! - `load` of an unknown key is `Ok(None)`, not an error.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const BOARD_TABLE: &str = "board_blobs";

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from board blob stores.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "board store requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "board store requires table `{table}`")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value persistence for serialized boards.
pub trait BoardStore {
    /// Loads the payload stored under `key`, if any.
    fn load(&self, key: &str) -> StoreResult<Option<String>>;
    /// Stores `payload` under `key`, replacing any previous value.
    fn save(&self, key: &str, payload: &str) -> StoreResult<()>;
}

impl<S: BoardStore + ?Sized> BoardStore for &S {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, payload: &str) -> StoreResult<()> {
        (**self).save(key, payload)
    }
}

/// SQLite-backed board store.
pub struct SqliteBoardStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBoardStore<'conn> {
    /// Creates a store from a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were not applied.
    /// - `MissingRequiredTable` when the blob table is absent.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_store_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl BoardStore for SqliteBoardStore<'_> {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM board_blobs WHERE storage_key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn save(&self, key: &str, payload: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO board_blobs (storage_key, payload)
             VALUES (?1, ?2)
             ON CONFLICT(storage_key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, payload],
        )?;
        Ok(())
    }
}

/// In-process store, the equivalent of browser key-value storage.
#[derive(Debug, Default)]
pub struct MemoryBoardStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with one payload.
    pub fn with_entry(key: impl Into<String>, payload: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.into(), payload.into());
        store
    }
}

impl BoardStore for MemoryBoardStore {
    fn load(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, payload: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

fn ensure_store_connection_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [BOARD_TABLE],
        |row| row.get(0),
    )?;
    if exists != 1 {
        return Err(StoreError::MissingRequiredTable(BOARD_TABLE));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{BoardStore, MemoryBoardStore};

    #[test]
    fn memory_store_overwrites_same_key() {
        let store = MemoryBoardStore::with_entry("k", "first");
        store.save("k", "second").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("second"));
        assert_eq!(store.load("other").unwrap(), None);
    }
}
