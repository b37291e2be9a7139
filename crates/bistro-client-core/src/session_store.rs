//! Keeps the current [`Session`] and makes it survive a restart of the client
//!
//! The stored value is read once when the store is created and is then served
//! from memory. Every change is written through to the backend.

use std::{fmt::Debug, sync::Arc};

use anyhow::Context as _;
use bistro_shared::{const_config::client::CLIENT_SESSION_STORAGE_KEY, session::Session};
use tracing::{info, warn};

mod memory;
pub use memory::MemoryBackend;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileBackend;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserBackend;

/// Durable string storage keyed by name
pub trait StorageBackend: Debug + Send {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove(&mut self, key: &str) -> anyhow::Result<()>;
}

#[derive(Debug)]
pub struct SessionStore {
    backend: Box<dyn StorageBackend>,
    current: Option<Arc<Session>>,
}

impl SessionStore {
    /// Restores the session held by `backend` if any
    ///
    /// Unreadable or malformed data is treated as "no session" and left in
    /// place until the next [`Self::save`] or [`Self::clear`] overwrites it.
    #[tracing::instrument]
    pub fn load<B: StorageBackend + 'static>(backend: B) -> Self {
        let current = read_session(&backend).map(Arc::new);
        if let Some(session) = current.as_ref() {
            info!(user_id = %session.identity().id, "session restored");
        }
        Self {
            backend: Box::new(backend),
            current,
        }
    }

    /// Store that forgets everything when dropped
    pub fn in_memory() -> Self {
        Self::load(MemoryBackend::default())
    }

    pub fn current(&self) -> Option<Arc<Session>> {
        self.current.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Replaces the current session
    ///
    /// The in memory value is updated even if writing to the backend fails so
    /// the user can keep working, the error only means it will not survive a
    /// restart.
    #[tracing::instrument(skip(session), fields(user_id = %session.identity().id))]
    pub fn save(&mut self, session: Arc<Session>) -> anyhow::Result<()> {
        let serialized = serde_json::to_string(session.as_ref());
        self.current = Some(session);
        let serialized = serialized.context("failed to serialize session")?;
        self.backend
            .set(CLIENT_SESSION_STORAGE_KEY, &serialized)
            .context("failed to persist session")
    }

    /// Removes the session both from memory and from the backend
    #[tracing::instrument]
    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.current = None;
        self.backend
            .remove(CLIENT_SESSION_STORAGE_KEY)
            .context("failed to remove persisted session")
    }
}

fn read_session(backend: &dyn StorageBackend) -> Option<Session> {
    let raw = match backend.get(CLIENT_SESSION_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!(?err, "failed to read persisted session");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(session) => Some(session),
        Err(err) => {
            warn!(?err, "persisted session is malformed and was ignored");
            None
        }
    }
}
