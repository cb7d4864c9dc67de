//! Mirrors accepted event changes to the booking backend.
//!
//! The local store is always updated first. These calls only run after a
//! change has been validated and applied, and they are safe to repeat for
//! the same id.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use tracing::{debug, info};
use url::Url;

use crate::error::{PawcalError, PawcalResult};
use crate::event::EventRecord;
use crate::session::SessionContext;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// REST client for `{base}/events`.
pub struct RestRemote {
    http: reqwest::Client,
    base_url: Url,
    bearer: Option<String>,
}

impl RestRemote {
    /// Build a client for `base_url`, authenticated with the session's token.
    pub fn new(base_url: &str, session: &SessionContext) -> PawcalResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| PawcalError::Config(format!("Invalid api_base_url '{}': {}", base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(PawcalError::Config(format!(
                "Invalid api_base_url '{}': not a base URL",
                base_url
            )));
        }

        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(RestRemote {
            http,
            base_url,
            bearer: session.token().map(String::from),
        })
    }

    /// `{base}/events` or `{base}/events/{id}`.
    pub fn events_url(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("events");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.http.request(method, url);
        match &self.bearer {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// POST a newly created event.
    pub async fn create_event(&self, event: &EventRecord) -> PawcalResult<()> {
        let url = self.events_url(None);
        let resp = self.request(Method::POST, url.clone()).json(event).send().await?;
        check_status("POST", &url, resp.status())?;

        info!(event_id = %event.id, "Pushed new event to backend");
        Ok(())
    }

    /// PUT the full record of an edited or moved event.
    pub async fn update_event(&self, event: &EventRecord) -> PawcalResult<()> {
        let url = self.events_url(Some(&event.id));
        let resp = self.request(Method::PUT, url.clone()).json(event).send().await?;
        check_status("PUT", &url, resp.status())?;

        info!(event_id = %event.id, "Pushed event update to backend");
        Ok(())
    }

    /// DELETE by id. Already-deleted events count as success.
    pub async fn delete_event(&self, event_id: &str) -> PawcalResult<()> {
        let url = self.events_url(Some(event_id));
        let resp = self.request(Method::DELETE, url.clone()).send().await?;

        if resp.status() == StatusCode::NOT_FOUND {
            debug!(event_id = %event_id, "Event already gone on backend");
            return Ok(());
        }
        check_status("DELETE", &url, resp.status())?;

        info!(event_id = %event_id, "Deleted event on backend");
        Ok(())
    }
}

fn check_status(method: &str, url: &Url, status: StatusCode) -> PawcalResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(PawcalError::Remote(format!("{} {} failed: {}", method, url, status)))
    }
}
