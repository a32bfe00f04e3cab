use crate::usecase::ports::store::StoreError;

/// Terminal failure of a cleanse run. Every variant aborts the run; nothing
/// is retried or converted into a success.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CleanseError {
    #[error("history store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("history lookup failed on chunk {chunk} of {total_chunks}: {source}")]
    StoreReadFailed {
        chunk: usize,
        total_chunks: usize,
        source: StoreError,
    },

    /// Grid decisions were already applied; `applied_chunks` increments landed
    /// and stay applied.
    #[error(
        "history update failed on chunk {chunk} of {total_chunks} \
         ({applied_chunks} chunk(s) already applied): {source}"
    )]
    StorePersistenceFailed {
        chunk: usize,
        total_chunks: usize,
        applied_chunks: usize,
        source: StoreError,
    },

    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl CleanseError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::StoreUnavailable(_) => "store_unavailable",
            Self::StoreReadFailed { .. } => "store_read_failed",
            Self::StorePersistenceFailed { .. } => "store_persistence_failed",
            Self::MalformedInput(_) => "malformed_input",
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}
