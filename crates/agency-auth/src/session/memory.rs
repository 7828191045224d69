//! In-process session store.

use agency_core::{Session, SessionStore};

/// Holds a single session in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    session: Option<Session>,
}

impl MemorySessionStore {
    /// Creates an empty (anonymous) store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `session`.
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.session.clone()
    }

    fn set(&mut self, session: Session) {
        self.session = Some(session);
    }

    fn clear(&mut self) {
        self.session = None;
    }
}
