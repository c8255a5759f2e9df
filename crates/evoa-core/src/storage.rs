//! Persistent key-value preferences.
//!
//! The application persists exactly one value (the theme mode), but the
//! storage seam is a small trait so the theme store can run against redb on
//! disk, a plain in-memory map, or a deliberately broken backend in tests.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use redb::{Database, TableDefinition};

use crate::error::EvoaResult;

/// File name of the preferences database inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.redb";

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// A string-to-string preference slot store.
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> EvoaResult<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> EvoaResult<()>;
}

/// Preferences stored in a redb database file.
#[derive(Clone)]
pub struct RedbPreferences {
    db: Arc<Database>,
}

impl RedbPreferences {
    /// Open (or create) the preferences database at `path`.
    ///
    /// Creates the parent directory and the preferences table if needed.
    pub fn open(path: impl AsRef<Path>) -> EvoaResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "Opened preferences database");

        Ok(Self { db: Arc::new(db) })
    }

    /// Open the preferences database inside a data directory.
    pub fn open_in(data_dir: impl AsRef<Path>) -> EvoaResult<Self> {
        Self::open(data_dir.as_ref().join(PREFERENCES_FILE))
    }
}

impl PreferenceStore for RedbPreferences {
    fn get(&self, key: &str) -> EvoaResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> EvoaResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// Volatile preferences, lost when the process exits.
#[derive(Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> EvoaResult<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> EvoaResult<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
