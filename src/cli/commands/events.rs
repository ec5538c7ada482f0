//! Read-only queries over the visit log.

use std::path::Path;

use chrono::DateTime;
use tokio::runtime::Runtime;

use crate::db;
use crate::error::{Result, ResultExt};

/// Print the most recent visit events, newest first.
pub fn cmd_recent(rt: &Runtime, db_path: &Path, limit: i64) -> Result<()> {
    rt.block_on(async {
        let pool = db::init_db(&db::db_url(Some(db_path)))
            .await
            .with_context("opening visit database")?;
        let events = db::recent_events(&pool, limit)
            .await
            .with_context("querying recent events")?;

        if events.is_empty() {
            println!("No visit events recorded yet.");
            return Ok(());
        }

        for event in events {
            println!(
                "{}  {:6}  {:10}  {}",
                format_timestamp(event.observed_at),
                event.hex,
                event.registration.as_deref().unwrap_or("-"),
                event.normalized_type.as_deref().unwrap_or("-")
            );
        }
        Ok(())
    })
}

/// Print the visit-count leaderboard.
pub fn cmd_top(rt: &Runtime, db_path: &Path, hours: Option<i64>, limit: i64) -> Result<()> {
    rt.block_on(async {
        let pool = db::init_db(&db::db_url(Some(db_path)))
            .await
            .with_context("opening visit database")?;
        let since = match hours {
            Some(h) => chrono::Utc::now().timestamp() - h * 3600,
            None => 0,
        };
        let top = db::top_registrations(&pool, since, limit)
            .await
            .with_context("querying top registrations")?;

        if top.is_empty() {
            println!("No resolved visits in the selected window.");
            return Ok(());
        }

        for (rank, (registration, count)) in top.into_iter().enumerate() {
            println!("{:3}. {:10} {:5} visits", rank + 1, registration, count);
        }
        Ok(())
    })
}

fn format_timestamp(epoch: i64) -> String {
    match DateTime::from_timestamp(epoch, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => epoch.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
    }

    #[test]
    fn test_unopenable_database_carries_context() {
        let rt = Runtime::new().unwrap();
        let err = cmd_recent(&rt, Path::new("/nonexistent/dir/tailwatch.db"), 5).unwrap_err();
        assert!(err.to_string().contains("opening visit database"));
    }
}
