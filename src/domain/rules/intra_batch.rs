use std::collections::HashSet;

use crate::domain::entities::grid::{CandidateEntry, CanonicalKey, CellPosition, Grid};
use crate::domain::rules::normalize::canonical_key;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntraBatchOutcome {
    /// One entry per distinct key, in first-seen order.
    pub candidates: Vec<CandidateEntry>,
    pub total_numbers: usize,
    pub intra_sheet_duplicates: usize,
}

impl IntraBatchOutcome {
    pub fn distinct_keys(&self) -> Vec<CanonicalKey> {
        self.candidates.iter().map(|entry| entry.key.clone()).collect()
    }
}

/// Walks the grid row by row, left to right. The first occurrence of a key
/// becomes a candidate; every later occurrence is cleared in place.
pub fn dedupe_within_batch(grid: &mut Grid) -> IntraBatchOutcome {
    let mut seen: HashSet<CanonicalKey> = HashSet::new();
    let mut outcome = IntraBatchOutcome::default();

    for (row_idx, row) in grid.rows.iter_mut().enumerate() {
        for (col_idx, cell) in row.iter_mut().enumerate() {
            let Some(key) = canonical_key(cell) else {
                continue;
            };

            outcome.total_numbers += 1;
            if seen.contains(&key) {
                cell.clear();
                outcome.intra_sheet_duplicates += 1;
            } else {
                seen.insert(key.clone());
                outcome.candidates.push(CandidateEntry {
                    position: CellPosition::new(row_idx, col_idx),
                    key,
                });
            }
        }
    }

    outcome
}
