//! One server per event store.
//!
//! The lock file sits next to `store.json`, so two servers pointed at
//! different data directories can run side by side.

use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

const LOCK_FILE: &str = "server.lock";

/// Holds the store lock until dropped
pub struct StoreLock {
    _file: File,
    path: PathBuf,
}

impl StoreLock {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Lock `data_dir` for this process, failing if another server holds it.
pub fn acquire_lock(data_dir: &Path) -> Result<StoreLock> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    let path = data_dir.join(LOCK_FILE);
    let file = File::create(&path).context("Failed to create lock file")?;

    file.try_lock_exclusive().map_err(|_| {
        anyhow::anyhow!(
            "Another pawcal-server is already serving {}.\n\
            If you believe this is an error, remove: {}",
            data_dir.display(),
            path.display()
        )
    })?;

    Ok(StoreLock { _file: file, path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_lock_on_same_dir_fails() {
        let dir = tempfile::tempdir().unwrap();

        let first = acquire_lock(dir.path()).unwrap();
        assert!(first.path().exists());
        assert!(acquire_lock(dir.path()).is_err());

        drop(first);
        assert!(acquire_lock(dir.path()).is_ok());
    }
}
