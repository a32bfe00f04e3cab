use std::collections::HashMap;

use crate::domain::entities::grid::CanonicalKey;
use crate::usecase::ports::store::{CounterStore, StoreError};

pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Failure of one chunk inside a batched operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFailure {
    /// 1-based index of the failing chunk.
    pub chunk: usize,
    pub total_chunks: usize,
    /// Chunks that completed before the failure.
    pub completed_chunks: usize,
    pub source: StoreError,
}

/// Drives store reads and increments one chunk at a time. A chunk is issued
/// only after the previous one completed.
pub struct ChunkedBatchExecutor<'a> {
    store: &'a dyn CounterStore,
    chunk_size: usize,
}

impl<'a> ChunkedBatchExecutor<'a> {
    pub fn new(store: &'a dyn CounterStore, chunk_size: usize) -> Self {
        Self {
            store,
            chunk_size: chunk_size.max(1),
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_count(&self, key_count: usize) -> usize {
        key_count.div_ceil(self.chunk_size)
    }

    /// Reads counts for `keys` and merges the per-chunk results. A chunk that
    /// omits any requested key fails the whole read.
    pub fn read_counts(
        &self,
        keys: &[CanonicalKey],
    ) -> Result<HashMap<CanonicalKey, u32>, ChunkFailure> {
        let total_chunks = self.chunk_count(keys.len());
        let mut merged = HashMap::with_capacity(keys.len());

        for (idx, chunk) in keys.chunks(self.chunk_size).enumerate() {
            log::debug!(
                "reading history chunk {}/{} ({} keys)",
                idx + 1,
                total_chunks,
                chunk.len()
            );
            let failure = |source: StoreError| ChunkFailure {
                chunk: idx + 1,
                total_chunks,
                completed_chunks: idx,
                source,
            };

            let counts = self.store.read_batch(chunk).map_err(failure)?;
            let missing = chunk.iter().filter(|key| !counts.contains_key(*key)).count();
            if missing > 0 {
                return Err(failure(StoreError::PartialResponse { missing }));
            }

            for key in chunk {
                if let Some(count) = counts.get(key) {
                    merged.insert(key.clone(), *count);
                }
            }
        }

        Ok(merged)
    }

    /// Increments every key once per listing. Returns the number of chunks
    /// written. Chunks written before a failure are not undone.
    pub fn increment_all(&self, keys: &[CanonicalKey]) -> Result<usize, ChunkFailure> {
        let total_chunks = self.chunk_count(keys.len());

        for (idx, chunk) in keys.chunks(self.chunk_size).enumerate() {
            log::debug!(
                "writing history chunk {}/{} ({} keys)",
                idx + 1,
                total_chunks,
                chunk.len()
            );
            self.store
                .increment_batch(chunk)
                .map_err(|source| ChunkFailure {
                    chunk: idx + 1,
                    total_chunks,
                    completed_chunks: idx,
                    source,
                })?;
        }

        Ok(total_chunks)
    }
}
