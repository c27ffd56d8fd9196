//! Registry of live study sessions keyed by ID.

use std::collections::HashMap;
use std::sync::Mutex;

use flashcard_core::Session;
use uuid::Uuid;

use crate::error::{ApiError, Result};

/// Study sessions, one per client.
///
/// Sessions live until deleted or the process exits.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session and return its ID.
    pub fn insert(&self, session: Session) -> Result<Uuid> {
        let id = Uuid::new_v4();
        self.lock()?.insert(id, session);
        Ok(id)
    }

    /// Drop a session. Returns whether it existed.
    pub fn remove(&self, id: Uuid) -> Result<bool> {
        Ok(self.lock()?.remove(&id).is_some())
    }

    /// Run `f` against the session with `id`.
    pub fn with_session<T>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> T) -> Result<T> {
        let mut sessions = self.lock()?;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound(format!("Session {}", id)))?;
        Ok(f(session))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, Session>>> {
        self.sessions
            .lock()
            .map_err(|_| ApiError::Internal("session registry lock poisoned".to_string()))
    }
}
