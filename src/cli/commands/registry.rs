//! Aircraft registry maintenance commands.

use std::path::Path;

use tokio::runtime::Runtime;

use crate::db;
use crate::enrichment::cache::normalized_display;
use crate::error::{Result, ResultExt};
use crate::model::AircraftInfo;
use crate::normalizer;

/// Recompute the canonical type name for every registry entry.
///
/// Useful after the pattern table gains new rules: entries were normalized
/// with whatever rules existed when they resolved, and this brings them up
/// to date in one pass.
pub fn cmd_normalize(rt: &Runtime, db_path: &Path, dry_run: bool) -> Result<()> {
    rt.block_on(async {
        let pool = db::init_db(&db::db_url(Some(db_path)))
            .await
            .with_context("opening registry database")?;
        let entries = db::load_registry_entries(&pool)
            .await
            .with_context("loading registry entries")?;
        let total = entries.len();
        let mut changed = 0;

        for (hex, mut entry) in entries {
            let info = AircraftInfo {
                registration: entry.registration.clone(),
                aircraft_type: entry.aircraft_type.clone(),
                manufacturer: entry.manufacturer.clone(),
                icao_type: entry.icao_type.clone(),
            };
            // Entries with no raw type fields (older records) only carry the
            // combined display string; re-normalize that instead.
            let fresh = normalized_display(&info).or_else(|| {
                entry
                    .normalized_type
                    .as_deref()
                    .map(normalizer::normalize_display)
                    .filter(|d| d != normalizer::UNKNOWN)
            });
            if fresh == entry.normalized_type {
                continue;
            }

            changed += 1;
            println!(
                "{}: {} -> {}",
                hex,
                entry.normalized_type.as_deref().unwrap_or("-"),
                fresh.as_deref().unwrap_or("-")
            );
            if !dry_run {
                entry.normalized_type = fresh;
                db::upsert_registry_entry(&pool, &entry)
                    .await
                    .with_context("updating registry entry")?;
            }
        }

        if dry_run {
            println!("Would update {changed} of {total} entries");
        } else {
            println!("Updated {changed} of {total} entries");
        }
        Ok(())
    })
}
