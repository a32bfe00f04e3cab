use std::collections::HashMap;

use crate::domain::entities::grid::{CandidateEntry, CanonicalKey, Grid};

/// Maximum accepted occurrences of a key across all runs.
pub const DEFAULT_LIFETIME_CAP: u32 = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateOutcome {
    pub valid_numbers: usize,
    pub historical_duplicates: usize,
    /// Exactly the accepted keys, each once.
    pub to_increment: Vec<CanonicalKey>,
}

/// A key is accepted while its stored count is below `lifetime_cap`.
pub fn is_within_cap(historical_count: u32, lifetime_cap: u32) -> bool {
    historical_count < lifetime_cap
}

/// Applies the lifetime cap to each candidate using the counts read at the
/// start of the run. Missing counts are treated as 0.
pub fn apply_frequency_gate(
    grid: &mut Grid,
    candidates: &[CandidateEntry],
    counts: &HashMap<CanonicalKey, u32>,
    lifetime_cap: u32,
) -> GateOutcome {
    let mut outcome = GateOutcome::default();

    for candidate in candidates {
        let historical_count = counts.get(&candidate.key).copied().unwrap_or(0);
        if is_within_cap(historical_count, lifetime_cap) {
            outcome.valid_numbers += 1;
            outcome.to_increment.push(candidate.key.clone());
        } else {
            grid.clear_cell(candidate.position);
            outcome.historical_duplicates += 1;
        }
    }

    outcome
}
