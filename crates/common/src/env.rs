//! Environment/runtime helpers
//!
//! Sanity checks to ensure the data directories exist at startup.

use std::path::Path;

use tracing::{info, warn};

/// Create every data directory that is missing.
pub async fn ensure_env<P: AsRef<Path>>(data_dirs: &[P]) -> anyhow::Result<()> {
    for dir in data_dirs {
        let dir = dir.as_ref();
        if tokio::fs::metadata(dir).await.is_ok() {
            continue;
        }
        warn!(dir = %dir.display(), "data directory not found; creating it");
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
        info!(dir = %dir.display(), "data directory created");
    }
    Ok(())
}
