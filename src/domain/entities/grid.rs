use std::fmt;

/// Row-major table of raw cell text, mutated in place by a cleanse run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, position: CellPosition) -> Option<&str> {
        self.rows
            .get(position.row_idx)
            .and_then(|row| row.get(position.col_idx))
            .map(String::as_str)
    }

    /// Replaces the cell with an empty value. Out-of-range positions are ignored.
    pub fn clear_cell(&mut self, position: CellPosition) {
        if let Some(cell) = self
            .rows
            .get_mut(position.row_idx)
            .and_then(|row| row.get_mut(position.col_idx))
        {
            cell.clear();
        }
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

impl From<Vec<Vec<String>>> for Grid {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Grid::new(rows)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row_idx: usize,
    pub col_idx: usize,
}

impl CellPosition {
    pub fn new(row_idx: usize, col_idx: usize) -> Self {
        Self { row_idx, col_idx }
    }
}

/// Digit-only identity of a cell value. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Wraps an already normalized key. Returns `None` for an empty string.
    pub fn from_normalized(digits: String) -> Option<Self> {
        if digits.is_empty() {
            None
        } else {
            Some(CanonicalKey(digits))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// First occurrence of a key within the current grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntry {
    pub position: CellPosition,
    pub key: CanonicalKey,
}
