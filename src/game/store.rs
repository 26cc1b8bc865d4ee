//! Session registry abstraction
//!
//! The lobby only talks to [`SessionStore`], so where active sessions live
//! (process memory, an external cache, a database) can change without
//! touching game logic.

use crate::core::Session;
use crate::error::StoreError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Opaque identity of a player, supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(String);

impl PlayerId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage for active sessions, keyed by player
///
/// Sessions are handed out by value: a caller loads, mutates, and saves back.
/// Backends that keep sessions elsewhere serialize at those two points.
pub trait SessionStore {
    /// The active session for `player`, if any
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails.
    fn load(&self, player: &PlayerId) -> Result<Option<Session>, StoreError>;

    /// Insert or replace the active session for `player`
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails.
    fn save(&mut self, player: &PlayerId, session: Session) -> Result<(), StoreError>;

    /// Remove and return the active session for `player`
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails.
    fn delete(&mut self, player: &PlayerId) -> Result<Option<Session>, StoreError>;

    /// Whether `player` has an active session
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails.
    fn contains(&self, player: &PlayerId) -> Result<bool, StoreError> {
        Ok(self.load(player)?.is_some())
    }
}

/// Process-local store; lost on restart
#[derive(Debug, Default)]
pub struct InMemoryStore {
    sessions: FxHashMap<PlayerId, Session>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for InMemoryStore {
    fn load(&self, player: &PlayerId) -> Result<Option<Session>, StoreError> {
        Ok(self.sessions.get(player).cloned())
    }

    fn save(&mut self, player: &PlayerId, session: Session) -> Result<(), StoreError> {
        self.sessions.insert(player.clone(), session);
        Ok(())
    }

    fn delete(&mut self, player: &PlayerId) -> Result<Option<Session>, StoreError> {
        Ok(self.sessions.remove(player))
    }

    fn contains(&self, player: &PlayerId) -> Result<bool, StoreError> {
        Ok(self.sessions.contains_key(player))
    }
}
