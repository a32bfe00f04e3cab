use std::collections::HashMap;

use crate::domain::entities::grid::CanonicalKey;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("{0}")]
    Message(String),
    #[error("store returned no count for {missing} of the requested keys")]
    PartialResponse { missing: usize },
}

/// Durable key → occurrence count mapping. Counts are only ever changed by
/// `increment_batch`, which the store applies atomically per call.
pub trait CounterStore: Send + Sync {
    fn init(&self) -> Result<(), StoreError>;

    /// Absent keys read as 0.
    fn read_one(&self, key: &CanonicalKey) -> Result<u32, StoreError>;

    /// Must return an entry for every requested key.
    fn read_batch(&self, keys: &[CanonicalKey]) -> Result<HashMap<CanonicalKey, u32>, StoreError>;

    /// Adds one to every listed key. A key listed twice is incremented twice.
    fn increment_batch(&self, keys: &[CanonicalKey]) -> Result<(), StoreError>;

    fn clear_all(&self) -> Result<(), StoreError>;
}
