//! Everything a command needs: config, the loaded store and the session.

use anyhow::{Context as _, Result};
use pawcal_core::config::PawcalConfig;
use pawcal_core::remote::RestRemote;
use pawcal_core::session::SessionContext;
use pawcal_core::snapshot::{load_store, save_store};
use pawcal_core::{EventRecord, Scheduler};
use tracing::debug;

pub struct Context {
    pub config: PawcalConfig,
    pub scheduler: Scheduler,
    pub session: SessionContext,
}

/// A change to mirror to the backend once it has been applied locally.
pub enum Mirror<'a> {
    Created(&'a EventRecord),
    Updated(&'a EventRecord),
    Deleted(&'a str),
}

impl Context {
    pub fn load() -> Result<Self> {
        let config = PawcalConfig::load()?;

        let store_path = config.store_path();
        let store = load_store(&store_path)
            .with_context(|| format!("Failed to read event store at {}", store_path.display()))?;

        let session = SessionContext::load(config.session_path())?;

        debug!(
            store = %store_path.display(),
            events = store.len(),
            authenticated = session.is_authenticated(),
            "Loaded context"
        );

        Ok(Context {
            config,
            scheduler: Scheduler::new(store),
            session,
        })
    }

    pub fn save(&self) -> Result<()> {
        save_store(&self.config.store_path(), self.scheduler.store())?;
        Ok(())
    }

    fn remote(&self) -> Result<Option<RestRemote>> {
        match &self.config.api_base_url {
            Some(url) => Ok(Some(RestRemote::new(url, &self.session)?)),
            None => Ok(None),
        }
    }

    /// Push an applied change to the backend, if one is configured.
    pub async fn mirror(&self, change: Mirror<'_>) -> Result<()> {
        let Some(remote) = self.remote()? else {
            return Ok(());
        };

        match change {
            Mirror::Created(event) => remote.create_event(event).await?,
            Mirror::Updated(event) => remote.update_event(event).await?,
            Mirror::Deleted(id) => remote.delete_event(id).await?,
        }

        Ok(())
    }
}
