//! Persisted session collection: types, title derivation, and the
//! repository that mediates all `localStorage` traffic.
//!
//! DESIGN
//! ======
//! Two logical keys hold everything: `chatHistories` (the JSON-encoded
//! session list, timestamps as RFC 3339 strings) and `currentSessionId`
//! (the pointer to the session on screen). The repository rewrites the
//! whole collection on every mutation; upsert is last-write-wins per
//! session id and preserves list position on replace. Titles are never
//! trusted from storage — they are recomputed from the message list on
//! every persist.

#[cfg(test)]
#[path = "sessions_test.rs"]
mod sessions_test;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::message::{Message, Role};
use crate::util::persistence::{CURRENT_SESSION_KEY, HISTORY_KEY, StoreAdapter};

/// Title used until the user has sent a message.
pub const DEFAULT_TITLE: &str = "New conversation";

/// Assistant message seeded into every new session.
pub const GREETING: &str = "Hello! How can I help you today?";

/// Sidebar titles are cut to this many characters plus an ellipsis.
const TITLE_MAX_CHARS: usize = 25;

/// One saved conversation thread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub last_updated: DateTime<Utc>,
    /// Next message id to hand out. Monotonic per session so ids stay
    /// unique even when a delayed reply lands after newer appends.
    /// Defaults to 0 for data written before the field existed and is
    /// repaired on load.
    #[serde(default)]
    pub next_message_id: u64,
}

impl Session {
    /// A fresh session containing only the assistant greeting.
    pub fn seeded() -> Self {
        let now = Utc::now();
        Session {
            id: uuid::Uuid::new_v4().to_string(),
            title: DEFAULT_TITLE.to_owned(),
            messages: vec![Message {
                id: 1,
                role: Role::Assistant,
                content: GREETING.to_owned(),
                timestamp: now,
                chart_data: None,
            }],
            last_updated: now,
            next_message_id: 2,
        }
    }

    /// Ensure the id counter is ahead of every message already present.
    pub fn repair_counter(&mut self) {
        let max_id = self.messages.iter().map(|m| m.id).max().unwrap_or(0);
        self.next_message_id = self.next_message_id.max(max_id + 1);
    }

    /// Copy with the title recomputed and `last_updated` set to now,
    /// ready to be persisted.
    fn refreshed(&self) -> Session {
        Session {
            title: derive_title(&self.messages),
            last_updated: Utc::now(),
            ..self.clone()
        }
    }
}

/// Derive a session title from its messages: the first user message,
/// truncated to 25 characters plus an ellipsis, or the default title when
/// no user message exists yet.
pub fn derive_title(messages: &[Message]) -> String {
    let Some(first) = messages.iter().find(|m| m.role == Role::User) else {
        return DEFAULT_TITLE.to_owned();
    };
    let mut chars = first.content.chars();
    let head: String = chars.by_ref().take(TITLE_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Failures surfaced by the repository.
///
/// Missing keys are not errors (they read as empty state); only a value
/// that exists but cannot be decoded — or a session that cannot be
/// encoded — fails, and it fails outward with no recovery so corrupt
/// storage is never silently overwritten.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("stored session history could not be decoded: {0}")]
    Decode(serde_json::Error),
    #[error("session history could not be encoded: {0}")]
    Encode(serde_json::Error),
}

/// Loads and saves the session collection and the active-session pointer.
#[derive(Clone)]
pub struct SessionRepository {
    store: Arc<dyn StoreAdapter>,
}

impl SessionRepository {
    pub fn new(store: Arc<dyn StoreAdapter>) -> Self {
        SessionRepository { store }
    }

    /// The full persisted collection, in stored order. An absent key is
    /// an empty collection.
    pub fn load_all(&self) -> Result<Vec<Session>, StoreError> {
        let Some(raw) = self.store.read(HISTORY_KEY) else {
            return Ok(Vec::new());
        };
        let mut sessions: Vec<Session> =
            serde_json::from_str(&raw).map_err(StoreError::Decode)?;
        for session in &mut sessions {
            session.repair_counter();
        }
        Ok(sessions)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Session>, StoreError> {
        Ok(self.load_all()?.into_iter().find(|s| s.id == id))
    }

    /// Insert or replace by id. The stored record gets a recomputed title
    /// and a fresh `last_updated`; a replaced entry keeps its position.
    pub fn upsert(&self, session: &Session) -> Result<(), StoreError> {
        let mut sessions = self.load_all()?;
        let record = session.refreshed();
        match sessions.iter_mut().find(|s| s.id == record.id) {
            Some(slot) => *slot = record,
            None => sessions.push(record),
        }
        self.save_all(&sessions)
    }

    /// Create, persist, and return a new session seeded with the
    /// assistant greeting.
    pub fn create_session(&self) -> Result<Session, StoreError> {
        let mut sessions = self.load_all()?;
        let session = Session::seeded();
        sessions.push(session.clone());
        self.save_all(&sessions)?;
        Ok(session)
    }

    /// Display order for the sidebar: most recently updated first. The
    /// stored collection itself is never reordered.
    pub fn sorted_by_recency(&self) -> Result<Vec<Session>, StoreError> {
        let mut sessions = self.load_all()?;
        sessions.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        Ok(sessions)
    }

    pub fn current_session_id(&self) -> Option<String> {
        self.store.read(CURRENT_SESSION_KEY)
    }

    pub fn set_current_session_id(&self, id: &str) {
        self.store.write(CURRENT_SESSION_KEY, id);
    }

    fn save_all(&self, sessions: &[Session]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(sessions).map_err(StoreError::Encode)?;
        self.store.write(HISTORY_KEY, &raw);
        Ok(())
    }
}

/// Sidebar list state, refreshed from the repository after every
/// persisted mutation.
#[derive(Clone, Debug, Default)]
pub struct SessionsState {
    pub items: Vec<Session>,
}
