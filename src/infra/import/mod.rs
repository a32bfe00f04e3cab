pub mod csv;
pub mod xlsx;

use std::path::Path;

use anyhow::{bail, Result};

use crate::domain::entities::grid::Grid;

pub fn read_grid(path: &Path) -> Result<Grid> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => csv::read_csv_grid(path),
        "xlsx" | "xlsm" | "xls" | "ods" => xlsx::read_first_sheet_grid(path),
        other => bail!("unsupported file type: .{other} ({})", path.display()),
    }
}
