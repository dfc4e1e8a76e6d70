//! One-shot CSV ingestion into the clans store.
//!
//! Rows are read and resolved up front, then written in a single
//! transaction: either every imported row lands, or none do.

pub mod source;
pub mod timestamp;

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clans::{
    infrastructure::database::{self, DbPool},
    models::Clan,
    repository,
};

use crate::source::ImportRow;

pub const UNKNOWN_REGION: &str = "UNKNOWN";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Applies the row rules: blank names are skipped, a missing region becomes
/// [`UNKNOWN_REGION`], and `created_at` falls back to `run_started`.
pub fn prepare(rows: Vec<ImportRow>, run_started: DateTime<Utc>) -> (Vec<Clan>, usize) {
    let mut clans = Vec::with_capacity(rows.len());
    let mut skipped = 0;

    for (idx, row) in rows.into_iter().enumerate() {
        let Some(name) = row
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
        else {
            tracing::debug!("skipping row {}: blank name", idx + 1);
            skipped += 1;
            continue;
        };

        // only an absent value is defaulted; whitespace trims down to ""
        let region = row
            .region
            .as_deref()
            .map_or(UNKNOWN_REGION, str::trim);

        let created_at = timestamp::parse_timestamp(row.created_at.as_deref(), run_started);

        clans.push(Clan::with_created_at(name, region, created_at));
    }

    (clans, skipped)
}

/// Inserts `clans` in one transaction, rolling everything back on the first
/// failure.
pub async fn persist(db: &DbPool, clans: &[Clan]) -> Result<()> {
    let mut tx = db.begin().await?;

    for clan in clans {
        if let Err(e) = repository::clan::insert(&mut *tx, clan).await {
            if let Err(rollback) = tx.rollback().await {
                tracing::error!("rollback failed: {rollback}");
            }

            return Err(e.context(format!("inserting clan {:?}", clan.name)));
        }
    }

    tx.commit().await?;

    Ok(())
}

pub async fn import_clans(db: &DbPool, csv_path: &Path) -> Result<ImportSummary> {
    let run_started = Utc::now();

    database::ensure_schema(db).await?;

    let file =
        File::open(csv_path).with_context(|| format!("opening {}", csv_path.display()))?;
    let rows = source::read_rows(file)?;

    let (clans, skipped) = prepare(rows, run_started);
    persist(db, &clans).await?;

    tracing::info!("imported {} clans, skipped {skipped}", clans.len());

    Ok(ImportSummary {
        imported: clans.len(),
        skipped,
    })
}
