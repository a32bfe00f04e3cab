use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::grid::Grid;

/// Every record is data; ragged rows are kept as-is.
pub fn read_csv_grid(csv_path: &Path) -> Result<Grid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Grid::new(rows))
}
