use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use crate::config::CleanseConfig;
use crate::domain::entities::grid::Grid;
use crate::domain::entities::stats::{ProcessingStats, StatsAggregator};
use crate::domain::rules::frequency_gate::apply_frequency_gate;
use crate::domain::rules::intra_batch::dedupe_within_batch;
use crate::error::CleanseError;
use crate::infra::import::read_grid;
use crate::usecase::ports::progress::{PipelineStage, ProgressSink};
use crate::usecase::ports::store::CounterStore;
use crate::usecase::services::chunked_batch::ChunkedBatchExecutor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanseOutcome {
    pub grid: Grid,
    pub stats: ProcessingStats,
}

/// Runs the two deduplication rules against one grid and records accepted
/// values in the history store.
///
/// Runs issued through the same service are serialized, so their
/// read-then-increment sequences never interleave. Separate services or
/// processes sharing one store are not coordinated.
pub struct CleanseService {
    store: Arc<dyn CounterStore>,
    config: CleanseConfig,
    run_lock: Mutex<()>,
}

impl CleanseService {
    pub fn new(store: Arc<dyn CounterStore>, config: CleanseConfig) -> Self {
        Self {
            store,
            config,
            run_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> CleanseConfig {
        self.config
    }

    /// Reads the first sheet of `path` and cleans it.
    pub fn cleanse_file(
        &self,
        path: &Path,
        progress: &dyn ProgressSink,
    ) -> Result<CleanseOutcome, CleanseError> {
        let started = Instant::now();
        progress.notify(
            PipelineStage::Reading,
            &format!("Reading {}", path.display()),
        );

        let grid = read_grid(path)
            .map_err(|err| fail(progress, CleanseError::MalformedInput(format!("{err:#}"))))?;
        if grid.is_empty() {
            return Err(fail(
                progress,
                CleanseError::MalformedInput(format!(
                    "no extractable rows in {}",
                    path.display()
                )),
            ));
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        self.run(grid, &file_name, started, progress)
    }

    /// Cleans an in-memory grid. An empty grid is a valid, empty batch.
    pub fn cleanse(
        &self,
        grid: Grid,
        file_name: &str,
        progress: &dyn ProgressSink,
    ) -> Result<CleanseOutcome, CleanseError> {
        let started = Instant::now();
        progress.notify(
            PipelineStage::Reading,
            &format!("Reading {} row(s)", grid.row_count()),
        );
        self.run(grid, file_name, started, progress)
    }

    fn run(
        &self,
        mut grid: Grid,
        file_name: &str,
        started: Instant,
        progress: &dyn ProgressSink,
    ) -> Result<CleanseOutcome, CleanseError> {
        let _guard = self
            .run_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut stats = StatsAggregator::new(grid.row_count());

        progress.notify(
            PipelineStage::IntraDedup,
            "Scanning for in-sheet duplicates...",
        );
        let intra = dedupe_within_batch(&mut grid);
        stats.total_numbers = intra.total_numbers;
        stats.intra_sheet_duplicates = intra.intra_sheet_duplicates;
        let keys = intra.distinct_keys();

        progress.notify(
            PipelineStage::HistoricalLookup,
            &format!(
                "Checking historical frequency for {} unique number(s)...",
                keys.len()
            ),
        );
        let executor = ChunkedBatchExecutor::new(self.store.as_ref(), self.config.chunk_size);
        let counts = if keys.is_empty() {
            Default::default()
        } else {
            self.store
                .init()
                .map_err(|err| fail(progress, CleanseError::StoreUnavailable(err.to_string())))?;
            executor.read_counts(&keys).map_err(|failure| {
                fail(
                    progress,
                    CleanseError::StoreReadFailed {
                        chunk: failure.chunk,
                        total_chunks: failure.total_chunks,
                        source: failure.source,
                    },
                )
            })?
        };

        progress.notify(
            PipelineStage::GateDecision,
            "Applying lifetime occurrence cap...",
        );
        let gate = apply_frequency_gate(
            &mut grid,
            &intra.candidates,
            &counts,
            self.config.lifetime_cap,
        );
        stats.valid_numbers = gate.valid_numbers;
        stats.historical_duplicates = gate.historical_duplicates;

        progress.notify(
            PipelineStage::HistoricalPersist,
            &format!(
                "Updating historical records for {} number(s)...",
                gate.to_increment.len()
            ),
        );
        executor.increment_all(&gate.to_increment).map_err(|failure| {
            fail(
                progress,
                CleanseError::StorePersistenceFailed {
                    chunk: failure.chunk,
                    total_chunks: failure.total_chunks,
                    applied_chunks: failure.completed_chunks,
                    source: failure.source,
                },
            )
        })?;

        progress.notify(PipelineStage::Reconstruct, "Generating clean file...");
        let stats = stats.finish(file_name, started.elapsed());
        debug_assert!(stats.is_balanced(), "stats totals must balance: {stats:?}");

        log::info!(
            "cleaned {}: {} number(s), {} in-sheet duplicate(s), {} over cap, {} kept",
            stats.processed_file_name,
            stats.total_numbers,
            stats.intra_sheet_duplicates,
            stats.historical_duplicates,
            stats.valid_numbers
        );
        progress.notify(
            PipelineStage::Done,
            &format!("Kept {} of {} number(s)", stats.valid_numbers, stats.total_numbers),
        );

        Ok(CleanseOutcome { grid, stats })
    }
}

fn fail(progress: &dyn ProgressSink, err: CleanseError) -> CleanseError {
    progress.notify(PipelineStage::Failed, &err.to_string());
    err
}
