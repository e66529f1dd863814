//! In-memory session store.
//!
//! Maps user identity to at most one session. The store decides session
//! lifetime and nothing else; it is mutated only by create and delete plus
//! `get_mut` borrows handed to the dispatcher.

use std::collections::HashMap;

use crate::domain::foundation::UserId;
use crate::domain::session::Session;

/// Keyed owner of all live sessions.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<UserId, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a session for the user, replacing any existing one.
    pub fn create(&mut self, user: UserId, session: Session) -> &mut Session {
        self.sessions.insert(user, session);
        self.sessions
            .get_mut(&user)
            .expect("session inserted above")
    }

    pub fn get(&self, user: UserId) -> Option<&Session> {
        self.sessions.get(&user)
    }

    pub fn get_mut(&mut self, user: UserId) -> Option<&mut Session> {
        self.sessions.get_mut(&user)
    }

    pub fn exists(&self, user: UserId) -> bool {
        self.sessions.contains_key(&user)
    }

    pub fn delete(&mut self, user: UserId) -> Option<Session> {
        self.sessions.remove(&user)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
