use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use crate::infra::sqlite::schema::open_connection;

pub fn load_count(db_path: &Path, key: &str) -> Result<u32> {
    let conn = open_connection(db_path)?;
    let count: Option<i64> = conn
        .query_row(
            "SELECT count FROM key_count WHERE key = ?1",
            [key],
            |row| row.get(0),
        )
        .optional()
        .with_context(|| format!("failed to read count for {key}"))?;

    to_count(count.unwrap_or(0))
}

/// Reads every key inside one transaction. Absent keys map to 0.
pub fn load_counts<'a, I>(db_path: &Path, keys: I) -> Result<HashMap<String, u32>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start count lookup transaction")?;

    let mut counts = HashMap::new();
    {
        let mut select_stmt = tx
            .prepare("SELECT count FROM key_count WHERE key = ?1")
            .context("failed to prepare count lookup")?;

        for key in keys {
            let count: Option<i64> = select_stmt
                .query_row([key], |row| row.get(0))
                .optional()
                .with_context(|| format!("failed to read count for {key}"))?;
            counts.insert(key.to_string(), to_count(count.unwrap_or(0))?);
        }
    }

    tx.commit()
        .context("failed to finish count lookup transaction")?;
    Ok(counts)
}

/// Adds one to every key in a single transaction; either all land or none.
pub fn increment_counts<'a, I>(db_path: &Path, keys: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start count increment transaction")?;

    let mut upsert_stmt = tx
        .prepare(
            "INSERT INTO key_count(key, count) VALUES (?1, 1)
             ON CONFLICT(key) DO UPDATE
             SET count = count + 1, updated_at = CURRENT_TIMESTAMP",
        )
        .context("failed to prepare count increment")?;

    for key in keys {
        upsert_stmt
            .execute(params![key])
            .with_context(|| format!("failed to increment count for {key}"))?;
    }

    drop(upsert_stmt);
    tx.commit()
        .context("failed to commit count increments")?;
    Ok(())
}

pub fn clear_counts(db_path: &Path) -> Result<()> {
    let conn = open_connection(db_path)?;
    conn.execute("DELETE FROM key_count", [])
        .context("failed to clear counts")?;
    Ok(())
}

fn to_count(value: i64) -> Result<u32> {
    u32::try_from(value).with_context(|| format!("stored count out of range: {value}"))
}
