//! Process-wide token → session map.
//!
//! One mutex guards token allocation and the map, so issuing a token and
//! inserting its session is a single atomic step. Each session additionally
//! sits behind its own mutex; two requests carrying the same token are
//! serialized on that lock instead of racing on the counters.
//!
//! Sessions are never evicted. They live as long as the registry does.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use crate::practice_engine::session::{clock_seed, Session};

pub type SessionHandle = Arc<Mutex<Session>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no session for token {0:?}")]
    NotFound(String),
}

#[derive(Debug)]
struct Inner {
    seed: u64,
    issued: u64,
    sessions: HashMap<String, SessionHandle>,
}

#[derive(Debug)]
pub struct SessionRegistry {
    inner: Mutex<Inner>,
}

impl SessionRegistry {
    /// Registry whose token prefix comes from the current clock reading.
    pub fn new() -> Self {
        Self::with_seed(clock_seed(Utc::now()))
    }

    /// Registry with a fixed token prefix.
    pub fn with_seed(seed: u64) -> Self {
        SessionRegistry {
            inner: Mutex::new(Inner { seed, issued: 0, sessions: HashMap::new() }),
        }
    }

    // A panic while holding the lock cannot leave the map half-written.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Allocate a fresh token and session and register them.
    pub fn create_session(&self) -> (String, SessionHandle) {
        let mut inner = self.lock();
        let issued = inner.issued;
        let token = format!("{}:{}", inner.seed, issued);
        inner.issued += 1;

        let session = Session::for_issue(token.clone(), issued);
        let created_at = session.created_at();
        let handle = Arc::new(Mutex::new(session));
        inner.sessions.insert(token.clone(), Arc::clone(&handle));
        debug!(%token, %created_at, live = inner.sessions.len(), "session created");
        (token, handle)
    }

    pub fn lookup(&self, token: &str) -> Result<SessionHandle, RegistryError> {
        self.lock()
            .sessions
            .get(token)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(token.to_string()))
    }

    /// Find the session for `token`, or start a new one when the token is
    /// absent, empty or unknown. The flag reports whether one was created.
    pub fn resolve_or_create(&self, token: Option<&str>) -> (String, SessionHandle, bool) {
        if let Some(t) = token.filter(|t| !t.is_empty()) {
            match self.lookup(t) {
                Ok(handle) => return (t.to_string(), handle, false),
                Err(e) => debug!(error = %e, "unknown token, starting over"),
            }
        }
        let (token, handle) = self.create_session();
        (token, handle, true)
    }

    pub fn len(&self) -> usize {
        self.lock().sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Lock one session for the length of a request.
pub fn lock_session(handle: &SessionHandle) -> MutexGuard<'_, Session> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}
