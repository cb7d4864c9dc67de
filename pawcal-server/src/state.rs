use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use pawcal_core::Scheduler;
use pawcal_core::config::PawcalConfig;
use pawcal_core::snapshot::{load_store, save_store};
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

/// Shared application state.
///
/// Every request that reads or writes the store takes the one scheduler
/// lock, so writes are applied strictly one after another. Writes go
/// through [`AppState::transact`] so memory never runs ahead of disk.
#[derive(Clone)]
pub struct AppState {
    scheduler: Arc<Mutex<Scheduler>>,
    store_path: PathBuf,
}

impl AppState {
    pub fn load(config: &PawcalConfig) -> Result<Self> {
        let store_path = config.store_path();
        let store = load_store(&store_path)?;
        info!(store = %store_path.display(), events = store.len(), "Loaded event store");

        Ok(Self::new(Scheduler::new(store), store_path))
    }

    pub fn new(scheduler: Scheduler, store_path: PathBuf) -> Self {
        AppState {
            scheduler: Arc::new(Mutex::new(scheduler)),
            store_path,
        }
    }

    pub async fn scheduler(&self) -> MutexGuard<'_, Scheduler> {
        self.scheduler.lock().await
    }

    /// Apply a write to a copy of the scheduler, save it, and only then make
    /// it the live state. If `apply` fails or the save fails, nothing changes.
    pub async fn transact<T, E>(&self, apply: impl FnOnce(&mut Scheduler) -> Result<T, E>) -> Result<T, E>
    where
        E: From<anyhow::Error>,
    {
        let mut live = self.scheduler.lock().await;
        let mut draft = live.clone();

        let out = apply(&mut draft)?;

        save_store(&self.store_path, draft.store()).map_err(|e| E::from(anyhow::Error::from(e)))?;
        *live = draft;

        Ok(out)
    }
}
