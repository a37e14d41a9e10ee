// src/session/store.rs — JSON-file persistence for the session

use std::path::PathBuf;

use super::SessionState;
use crate::infra::errors::FeastError;
use crate::infra::paths;

/// Reads and writes the session file. The on-disk format is the same flat
/// object the export/import commands exchange.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn open_default() -> Self {
        Self::new(paths::session_path())
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load the session, failing on unreadable or unparsable content.
    /// A missing file is a fresh session, not an error.
    pub fn load(&self) -> Result<SessionState, FeastError> {
        if !self.path.exists() {
            return Ok(SessionState::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load the session, starting fresh (with a warning) when the file is
    /// unreadable. Used by the CLI so a corrupted file never blocks cooking.
    pub fn load_or_default(&self) -> SessionState {
        match self.load() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(
                    "Could not read session file {}: {}. Starting fresh.",
                    self.path.display(),
                    e
                );
                SessionState::new()
            }
        }
    }

    pub fn save(&self, state: &SessionState) -> Result<(), FeastError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
