//! Game session management for hosting many games in one process.
//!
//! Each session owns its own [`GameEngine`]; the manager serializes access
//! so several threads can drive different games (or take turns on the
//! same one) without sharing any global state.

use crate::games::gess::{
    GameEngine, GameOutcome, Grid, Move, MoveError, SuicidePolicy, TurnResult,
};
use derive_more::{Display, From};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Error from the session registry.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum SessionError {
    /// No session with this ID.
    #[display("Session {:?} not found", _0)]
    NotFound(SessionId),

    /// A session with this ID already exists.
    #[display("Session {:?} already exists", _0)]
    AlreadyExists(SessionId),

    /// The game rejected the move.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),
}

impl std::error::Error for SessionError {}

/// Thread-safe registry of independent games.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameEngine>>>,
}

impl SessionManager {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a standard game under `id`.
    #[instrument(skip(self))]
    pub fn create(
        &self,
        id: impl Into<SessionId> + std::fmt::Debug,
        policy: SuicidePolicy,
    ) -> Result<(), SessionError> {
        let id = id.into();
        let mut sessions = self.lock();
        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists(id));
        }
        info!(session_id = %id, "Creating new game session");
        sessions.insert(id, GameEngine::with_policy(policy));
        Ok(())
    }

    /// Submits a move to the session's game.
    #[instrument(skip(self))]
    pub fn submit(&self, id: &str, action: Move) -> Result<TurnResult, SessionError> {
        let mut sessions = self.lock();
        let engine = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        Ok(engine.submit(action)?)
    }

    /// Copies the session's board.
    #[instrument(skip(self))]
    pub fn snapshot(&self, id: &str) -> Result<Grid, SessionError> {
        self.with_engine(id, GameEngine::board_snapshot)
    }

    /// Reads the session's outcome.
    #[instrument(skip(self))]
    pub fn outcome(&self, id: &str) -> Result<GameOutcome, SessionError> {
        self.with_engine(id, GameEngine::outcome)
    }

    /// Removes a session, returning its final engine.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> Result<GameEngine, SessionError> {
        let engine = self
            .lock()
            .remove(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        debug!(session_id = %id, "Session removed");
        Ok(engine)
    }

    /// IDs of all sessions, sorted.
    pub fn session_ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = self.lock().keys().cloned().collect();
        ids.sort();
        ids
    }

    fn with_engine<T>(&self, id: &str, f: impl FnOnce(&GameEngine) -> T) -> Result<T, SessionError> {
        self.lock()
            .get(id)
            .map(f)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, GameEngine>> {
        // A panic while holding the lock cannot leave an engine half-updated:
        // engines only mutate after validation succeeds.
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
