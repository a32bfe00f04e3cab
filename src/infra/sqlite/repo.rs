use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::entities::grid::CanonicalKey;
use crate::infra::sqlite::queries::{clear_counts, increment_counts, load_count, load_counts};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::store::{CounterStore, StoreError};

/// History store backed by a local SQLite file. Each call opens its own
/// connection, and each batch is one transaction.
pub struct SqliteCounterStore {
    pub db_path: PathBuf,
}

impl SqliteCounterStore {
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

impl CounterStore for SqliteCounterStore {
    fn init(&self) -> Result<(), StoreError> {
        init_db(&self.db_path).map_err(|err| StoreError::Unavailable(format!("{err:#}")))
    }

    fn read_one(&self, key: &CanonicalKey) -> Result<u32, StoreError> {
        load_count(&self.db_path, key.as_str())
            .map_err(|err| StoreError::Message(format!("{err:#}")))
    }

    fn read_batch(&self, keys: &[CanonicalKey]) -> Result<HashMap<CanonicalKey, u32>, StoreError> {
        let loaded = load_counts(&self.db_path, keys.iter().map(CanonicalKey::as_str))
            .map_err(|err| StoreError::Message(format!("{err:#}")))?;

        Ok(keys
            .iter()
            .filter_map(|key| loaded.get(key.as_str()).map(|count| (key.clone(), *count)))
            .collect())
    }

    fn increment_batch(&self, keys: &[CanonicalKey]) -> Result<(), StoreError> {
        increment_counts(&self.db_path, keys.iter().map(CanonicalKey::as_str))
            .map_err(|err| StoreError::Message(format!("{err:#}")))
    }

    fn clear_all(&self) -> Result<(), StoreError> {
        clear_counts(&self.db_path).map_err(|err| StoreError::Message(format!("{err:#}")))
    }
}
