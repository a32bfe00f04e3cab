use std::sync::Arc;

use crate::domain::entities::grid::CanonicalKey;
use crate::domain::rules::normalize::canonical_key;
use crate::usecase::ports::store::{CounterStore, StoreError};

/// Administrative access to the occurrence history.
pub struct HistoryService {
    store: Arc<dyn CounterStore>,
}

impl HistoryService {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self { store }
    }

    /// Normalizes `raw` and returns its key with the stored count, or `None`
    /// when the value has no digits.
    pub fn lookup(&self, raw: &str) -> Result<Option<(CanonicalKey, u32)>, StoreError> {
        let Some(key) = canonical_key(raw) else {
            return Ok(None);
        };
        self.store.init()?;
        let count = self.store.read_one(&key)?;
        Ok(Some((key, count)))
    }

    pub fn clear_history(&self) -> Result<(), StoreError> {
        self.store.init()?;
        self.store.clear_all()?;
        log::info!("history cleared");
        Ok(())
    }
}
