use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::grid::CanonicalKey;
use crate::usecase::ports::store::{CounterStore, StoreError};

#[derive(Debug, Default)]
struct MemoryState {
    counts: HashMap<String, u32>,
    read_batch_calls: usize,
    increment_batch_calls: usize,
    unavailable: bool,
    /// 1-based call numbers that fail.
    failing_read_call: Option<usize>,
    failing_increment_call: Option<usize>,
    drop_from_reads: Option<String>,
}

/// Process-local history store. Besides backing throwaway runs it can be
/// told to fail a specific batch call, which makes partial-failure paths
/// reproducible.
#[derive(Debug, Default)]
pub struct InMemoryCounterStore {
    state: Mutex<MemoryState>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_counts<I, K>(counts: I) -> Self
    where
        I: IntoIterator<Item = (K, u32)>,
        K: Into<String>,
    {
        let store = Self::default();
        store.lock().counts = counts.into_iter().map(|(k, v)| (k.into(), v)).collect();
        store
    }

    pub fn count(&self, key: &str) -> u32 {
        self.lock().counts.get(key).copied().unwrap_or(0)
    }

    pub fn read_batch_calls(&self) -> usize {
        self.lock().read_batch_calls
    }

    pub fn increment_batch_calls(&self) -> usize {
        self.lock().increment_batch_calls
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }

    pub fn fail_read_call(&self, call: usize) {
        self.lock().failing_read_call = Some(call);
    }

    pub fn fail_increment_call(&self, call: usize) {
        self.lock().failing_increment_call = Some(call);
    }

    /// Makes batched reads silently omit `key`.
    pub fn omit_from_reads(&self, key: &str) {
        self.lock().drop_from_reads = Some(key.to_string());
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CounterStore for InMemoryCounterStore {
    fn init(&self) -> Result<(), StoreError> {
        if self.lock().unavailable {
            return Err(StoreError::Unavailable("in-memory store is offline".to_string()));
        }
        Ok(())
    }

    fn read_one(&self, key: &CanonicalKey) -> Result<u32, StoreError> {
        Ok(self.count(key.as_str()))
    }

    fn read_batch(&self, keys: &[CanonicalKey]) -> Result<HashMap<CanonicalKey, u32>, StoreError> {
        let mut state = self.lock();
        state.read_batch_calls += 1;
        if state.failing_read_call == Some(state.read_batch_calls) {
            return Err(StoreError::Message(format!(
                "injected read failure on call {}",
                state.read_batch_calls
            )));
        }

        Ok(keys
            .iter()
            .filter(|key| state.drop_from_reads.as_deref() != Some(key.as_str()))
            .map(|key| {
                let count = state.counts.get(key.as_str()).copied().unwrap_or(0);
                (key.clone(), count)
            })
            .collect())
    }

    fn increment_batch(&self, keys: &[CanonicalKey]) -> Result<(), StoreError> {
        let mut state = self.lock();
        state.increment_batch_calls += 1;
        if state.failing_increment_call == Some(state.increment_batch_calls) {
            return Err(StoreError::Message(format!(
                "injected write failure on call {}",
                state.increment_batch_calls
            )));
        }

        for key in keys {
            *state.counts.entry(key.as_str().to_string()).or_insert(0) += 1;
        }
        Ok(())
    }

    fn clear_all(&self) -> Result<(), StoreError> {
        self.lock().counts.clear();
        Ok(())
    }
}
