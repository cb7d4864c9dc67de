//! Event store persistence between runs.

use std::path::Path;

use tracing::debug;

use crate::error::PawcalResult;
use crate::store::EventStore;

/// Load the store saved at `path`, or an empty store if there is none yet.
pub fn load_store(path: &Path) -> PawcalResult<EventStore> {
    if !path.exists() {
        debug!(path = %path.display(), "No saved store, starting empty");
        return Ok(EventStore::default());
    }

    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save the store to `path`, replacing any previous snapshot atomically.
pub fn save_store(path: &Path, store: &EventStore) -> PawcalResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp = path.with_extension("json.tmp");
    let content = serde_json::to_string_pretty(store)?;

    std::fs::write(&temp, content)?;
    std::fs::rename(&temp, path)?;

    debug!(path = %path.display(), events = store.len(), "Saved store");
    Ok(())
}
