//! Cleans tabular phone-number sheets against two rules: a value may appear
//! only once per sheet, and only a capped number of times across every sheet
//! ever processed. The lifetime counts live behind [`CounterStore`].

pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod usecase;

pub use config::CleanseConfig;
pub use domain::entities::grid::{CandidateEntry, CanonicalKey, CellPosition, Grid};
pub use domain::entities::stats::ProcessingStats;
pub use error::CleanseError;
pub use usecase::ports::progress::{LogProgress, PipelineStage, ProgressSink};
pub use usecase::ports::store::{CounterStore, StoreError};
pub use usecase::services::cleanse_service::{CleanseOutcome, CleanseService};
