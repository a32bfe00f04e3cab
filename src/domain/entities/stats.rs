use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingStats {
    pub total_rows: usize,
    pub total_numbers: usize,
    pub intra_sheet_duplicates: usize,
    pub historical_duplicates: usize,
    pub valid_numbers: usize,
    pub processed_file_name: String,
    pub processing_time_ms: u128,
}

/// Counters collected while the rules run; frozen into [`ProcessingStats`] once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsAggregator {
    pub total_rows: usize,
    pub total_numbers: usize,
    pub intra_sheet_duplicates: usize,
    pub historical_duplicates: usize,
    pub valid_numbers: usize,
}

impl StatsAggregator {
    pub fn new(total_rows: usize) -> Self {
        Self {
            total_rows,
            ..Self::default()
        }
    }

    pub fn finish(self, processed_file_name: &str, elapsed: Duration) -> ProcessingStats {
        ProcessingStats {
            total_rows: self.total_rows,
            total_numbers: self.total_numbers,
            intra_sheet_duplicates: self.intra_sheet_duplicates,
            historical_duplicates: self.historical_duplicates,
            valid_numbers: self.valid_numbers,
            processed_file_name: processed_file_name.to_string(),
            processing_time_ms: elapsed.as_millis(),
        }
    }
}

impl ProcessingStats {
    pub fn removed_numbers(&self) -> usize {
        self.intra_sheet_duplicates + self.historical_duplicates
    }

    /// Share of detected values that were removed, in percent.
    pub fn duplicate_ratio(&self) -> f64 {
        if self.total_numbers == 0 {
            return 0.0;
        }
        self.removed_numbers() as f64 * 100.0 / self.total_numbers as f64
    }

    pub fn is_balanced(&self) -> bool {
        self.total_numbers
            == self.intra_sheet_duplicates + self.historical_duplicates + self.valid_numbers
    }
}

impl fmt::Display for ProcessingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "file:                   {}", self.processed_file_name)?;
        writeln!(f, "rows:                   {}", self.total_rows)?;
        writeln!(f, "numbers found:          {}", self.total_numbers)?;
        writeln!(f, "in-sheet duplicates:    {}", self.intra_sheet_duplicates)?;
        writeln!(f, "over lifetime cap:      {}", self.historical_duplicates)?;
        writeln!(f, "valid numbers kept:     {}", self.valid_numbers)?;
        writeln!(f, "duplicate ratio:        {:.1}%", self.duplicate_ratio())?;
        write!(f, "processing time:        {} ms", self.processing_time_ms)
    }
}
