//! Tracker service command.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Runtime;
use tracing::info;

use crate::config;
use crate::db;
use crate::enrichment::{AdsbDbClient, RegistryCache};
use crate::error::{Error, Result, ResultExt};
use crate::feed::{FileFeed, HttpFeed, SnapshotSource};
use crate::tracker::{Tracker, TrackerConfig};

/// Run the tracker service until Ctrl-C.
///
/// `url` and `file` override the configured feed; with neither, the config
/// file (or its defaults) decides.
pub fn cmd_run(rt: &Runtime, url: Option<&str>, file: Option<&Path>) -> Result<()> {
    let cfg = config::load();

    let source: Arc<dyn SnapshotSource> = if let Some(path) = file {
        info!(path = %path.display(), "Reading snapshots from file");
        Arc::new(FileFeed::new(path))
    } else if let Some(url) = url {
        Arc::new(HttpFeed::new(url))
    } else {
        match cfg.feed.mode.as_str() {
            "http" => Arc::new(HttpFeed::new(cfg.feed.url.clone())),
            "file" => {
                let path = cfg
                    .feed
                    .path
                    .as_ref()
                    .ok_or_else(|| Error::config("feed.mode = \"file\" requires feed.path"))?;
                Arc::new(FileFeed::new(path))
            }
            other => {
                return Err(Error::config(format!(
                    "unknown feed mode {other:?} (expected \"http\" or \"file\")"
                )));
            }
        }
    };

    rt.block_on(async {
        let pool = db::init_db(&db::db_url(Some(&cfg.db_path())))
            .await
            .with_context("initializing visit database")?;

        let cache = Arc::new(RegistryCache::new(
            Arc::new(AdsbDbClient::new()),
            pool.clone(),
        ));
        cache.preload(
            db::load_registry_entries(&pool)
                .await
                .with_context("preloading registry cache")?,
        );

        let tracker = Tracker::new(
            source,
            cache,
            pool,
            TrackerConfig {
                eviction_window: cfg.tracker.eviction_window_secs,
                recovery_window: cfg.tracker.recovery_window_secs,
                lookup_batch: cfg.lookup.batch_size,
            },
        );

        info!(
            interval = cfg.feed.interval_seconds,
            "Starting tracker service"
        );
        tracker
            .run(
                Duration::from_secs(cfg.feed.interval_seconds),
                Duration::from_secs(cfg.lookup.refresh_interval_secs),
            )
            .await;

        Ok(())
    })
}
