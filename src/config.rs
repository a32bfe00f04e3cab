use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use directories::ProjectDirs;

use crate::domain::rules::frequency_gate::DEFAULT_LIFETIME_CAP;
use crate::usecase::services::chunked_batch::DEFAULT_CHUNK_SIZE;

pub const DB_FILE_NAME: &str = "history.sqlite";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanseConfig {
    /// Keys per store round-trip.
    pub chunk_size: usize,
    /// Accepted occurrences allowed per key across all runs.
    pub lifetime_cap: u32,
}

impl Default for CleanseConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            lifetime_cap: DEFAULT_LIFETIME_CAP,
        }
    }
}

impl CleanseConfig {
    pub fn validate(self) -> Result<Self> {
        if self.chunk_size == 0 {
            bail!("chunk size must be at least 1");
        }
        if self.lifetime_cap == 0 {
            bail!("lifetime cap must be at least 1");
        }
        Ok(self)
    }
}

pub fn default_db_path() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "hellhbbd", "phone-cleanse")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().join(DB_FILE_NAME))
}
