//! In-memory page sessions. One `FormState` per loaded page, dropped when the
//! page unloads or when the store is full and the session is the least recently used.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::form::FormState;
use crate::models::Template;

#[derive(Debug)]
struct Session {
    state: FormState,
    last_seen: DateTime<Utc>,
}

/// Shared handle to all live sessions. Every access holds the store lock for
/// the whole closure, so actions are applied one at a time, to completion.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, Session>>>,
    capacity: usize,
    default_template: Template,
}

impl SessionStore {
    pub fn new(capacity: usize, default_template: Template) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            capacity,
            default_template,
        }
    }

    /// Starts a fresh session and returns its id and initial state.
    pub async fn open(&self) -> (Uuid, FormState) {
        let mut sessions = self.inner.lock().await;
        while sessions.len() >= self.capacity {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, s)| s.last_seen)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                    info!(session = %id, "evicted least recently used session");
                }
                None => break,
            }
        }
        let id = Uuid::new_v4();
        let state = FormState::new(self.default_template);
        sessions.insert(
            id,
            Session {
                state: state.clone(),
                last_seen: Utc::now(),
            },
        );
        debug!(session = %id, live = sessions.len(), "session opened");
        (id, state)
    }

    /// Runs `f` against the session's state. Returns `None` for unknown ids.
    pub async fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        let mut sessions = self.inner.lock().await;
        let session = sessions.get_mut(&id)?;
        session.last_seen = Utc::now();
        Some(f(&mut session.state))
    }

    pub async fn close(&self, id: Uuid) -> bool {
        let removed = self.inner.lock().await.remove(&id).is_some();
        if removed {
            debug!(session = %id, "session closed");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }
}
