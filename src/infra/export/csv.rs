use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::entities::grid::Grid;

pub fn cleaned_file_path(input_path: &Path) -> PathBuf {
    let stem = input_path
        .file_stem()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("sheet");
    input_path.with_file_name(format!("cleaned_{stem}.csv"))
}

pub fn write_csv_grid(grid: &Grid, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output dir: {}", parent.display()))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(output_path)
        .with_context(|| format!("failed to create csv: {}", output_path.display()))?;

    for row in &grid.rows {
        writer
            .write_record(row)
            .context("failed to write csv record")?;
    }

    writer
        .flush()
        .with_context(|| format!("failed to flush csv: {}", output_path.display()))?;
    Ok(())
}
