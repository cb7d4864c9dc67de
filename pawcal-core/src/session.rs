//! Login session for the admin user.
//!
//! The session is an explicit value: loaded once at startup, handed to
//! whatever needs the token (see [`crate::remote::RestRemote`]), and
//! cleared on logout.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PawcalError, PawcalResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<SessionUser>,
}

#[derive(Debug, Clone)]
pub struct SessionContext {
    path: PathBuf,
    data: SessionData,
}

impl SessionContext {
    /// Load the session stored at `path`. A missing file is a logged-out session.
    pub fn load(path: impl Into<PathBuf>) -> PawcalResult<Self> {
        let path = path.into();

        let data = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| PawcalError::Session(e.to_string()))?
        } else {
            debug!(path = %path.display(), "No saved session");
            SessionData::default()
        };

        Ok(SessionContext { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_authenticated(&self) -> bool {
        self.data.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.data.token.as_deref()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.data.user.as_ref()
    }

    /// `Authorization` header value, when logged in.
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }

    /// Store a token issued by the auth service and persist it.
    pub fn login(&mut self, token: impl Into<String>, user: SessionUser) -> PawcalResult<()> {
        info!(user = %user.email, "Logged in");
        self.data = SessionData {
            token: Some(token.into()),
            user: Some(user),
        };
        self.save()
    }

    /// Forget the token and user and remove the saved session.
    pub fn logout(&mut self) -> PawcalResult<()> {
        if let Some(user) = &self.data.user {
            info!(user = %user.email, "Logged out");
        }
        self.data = SessionData::default();

        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self) -> PawcalResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(&self.data).map_err(|e| PawcalError::Session(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
