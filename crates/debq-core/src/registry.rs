use crate::participant::ParticipantId;
use crate::session::Session;
use debq_config::questionnaire::question::QuestionSet;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

pub type SessionHandle = Arc<Mutex<Session>>;

/// Locks a session. A panic while holding the lock leaves the session in a consistent state, so
/// poisoning is ignored.
pub fn lock(session: &SessionHandle) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Keeps at most one live session per participant.
///
/// Operations on one participant's session are serialized by that session's own lock, while
/// different participants never contend on anything but the short map lookup.
#[derive(Debug)]
pub struct SessionRegistry {
    questions: Arc<QuestionSet>,
    sessions: Mutex<HashMap<ParticipantId, SessionHandle>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new(questions: Arc<QuestionSet>) -> Self {
        Self {
            questions,
            sessions: Mutex::default(),
        }
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<ParticipantId, SessionHandle>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the participant's session, creating a fresh one if there is none.
    pub fn get_or_create(&self, participant_id: ParticipantId) -> SessionHandle {
        self.sessions()
            .entry(participant_id)
            .or_insert_with(|| {
                tracing::debug!(%participant_id, "creating session");
                Arc::new(Mutex::new(Session::new(participant_id, Arc::clone(&self.questions))))
            })
            .clone()
    }

    #[must_use]
    pub fn get(&self, participant_id: ParticipantId) -> Option<SessionHandle> {
        self.sessions().get(&participant_id).cloned()
    }

    /// Puts the participant at the first question, with or without an existing session.
    pub fn reset(&self, participant_id: ParticipantId) -> SessionHandle {
        let session = self.get_or_create(participant_id);
        lock(&session).start();
        session
    }

    pub fn remove(&self, participant_id: ParticipantId) -> Option<SessionHandle> {
        let removed = self.sessions().remove(&participant_id);
        if removed.is_some() {
            tracing::debug!(%participant_id, "removed session");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions().is_empty()
    }

    /// Drops sessions that have been idle for longer than `max_idle`. Returns how many were dropped.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        self.evict_idle_at(Instant::now(), max_idle)
    }

    /// Like [`Self::evict_idle`] with an explicit clock. Sessions that are locked right now are
    /// busy and therefore kept.
    pub fn evict_idle_at(&self, now: Instant, max_idle: Duration) -> usize {
        let mut sessions = self.sessions();
        let before = sessions.len();
        sessions.retain(|participant_id, session| {
            let Ok(session) = session.try_lock() else {
                return true;
            };
            let idle = now.saturating_duration_since(session.last_activity());
            let keep = idle <= max_idle;
            if !keep {
                tracing::trace!(%participant_id, idle_secs = idle.as_secs(), "evicting idle session");
            }
            keep
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, remaining = sessions.len(), "evicted idle sessions");
        }
        evicted
    }
}
