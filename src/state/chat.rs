//! In-memory controller for the session currently on screen.
//!
//! DESIGN
//! ======
//! `ChatState` mirrors the active session's message list. Every append
//! upserts a snapshot through the repository before returning, so the
//! persisted entry for `active_id` always reflects the in-memory list —
//! no batching, no debounce. Simulated replies arrive through a
//! `ReplyTicket` keyed by the target session id plus a generation
//! number; switching sessions, starting a new chat, or sending another
//! message bumps the generation, so stale replies are dropped instead
//! of appending to whatever thread happens to be open when the timer
//! fires.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use chrono::Utc;

use crate::state::message::{Message, Role};
use crate::state::sessions::{Session, SessionRepository, StoreError, derive_title};

/// Claim on a future simulated reply. Valid only while its target
/// session stays active and no newer send, switch, or new chat has
/// bumped the reply generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyTicket {
    session_id: String,
    generation: u64,
}

/// State for the active conversation.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub active_id: Option<String>,
    pub messages: Vec<Message>,
    pub next_message_id: u64,
    /// True between the latest send and its reply landing; drives the
    /// typing indicator. Superseded tickets never clear it — only the
    /// ticket holding the current generation does.
    pub awaiting_reply: bool,
    /// Bumped on every send, session switch, and new chat. A ticket is
    /// honored only while it carries the current value.
    reply_generation: u64,
    /// Set when stored history exists but cannot be decoded. The widget
    /// renders an error state instead of silently overwriting storage.
    pub load_error: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        ChatState {
            active_id: None,
            messages: Vec::new(),
            next_message_id: 1,
            awaiting_reply: false,
            reply_generation: 0,
            load_error: None,
        }
    }
}

impl ChatState {
    /// Startup: adopt the session the persisted pointer names, or create
    /// a fresh one when the pointer is absent — or dangling. A pointer
    /// that resolves to nothing is treated exactly like no pointer.
    pub fn initialize(&mut self, repo: &SessionRepository) {
        let resolved = match repo.current_session_id() {
            Some(id) => match repo.find_by_id(&id) {
                Ok(found) => found,
                Err(err) => {
                    self.load_error = Some(err.to_string());
                    return;
                }
            },
            None => None,
        };

        match resolved {
            Some(session) => self.adopt(session),
            None => {
                if let Err(err) = self.start_new_chat(repo) {
                    self.load_error = Some(err.to_string());
                }
            }
        }
    }

    /// Switch to the given session object wholesale. The session is taken
    /// as passed — it need not exist in the persisted collection — and
    /// the pointer is persisted immediately.
    pub fn select_session(&mut self, session: &Session, repo: &SessionRepository) {
        repo.set_current_session_id(&session.id);
        self.adopt(session.clone());
    }

    /// Create a new persisted session and make it active.
    pub fn start_new_chat(&mut self, repo: &SessionRepository) -> Result<(), StoreError> {
        let session = repo.create_session()?;
        repo.set_current_session_id(&session.id);
        self.adopt(session);
        Ok(())
    }

    /// Append a user message and persist the session. Whitespace-only
    /// input is a silent no-op (`Ok(None)`); otherwise the appended
    /// message is returned so the caller can schedule a reply.
    pub fn append_user_message(
        &mut self,
        text: &str,
        repo: &SessionRepository,
    ) -> Result<Option<Message>, StoreError> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        let message = Message {
            id: self.allocate_message_id(),
            role: Role::User,
            content: text.to_owned(),
            timestamp: Utc::now(),
            chart_data: None,
        };
        self.messages.push(message.clone());
        self.persist_active(repo)?;
        Ok(Some(message))
    }

    /// Append a simulated assistant message and persist the session.
    pub fn append_assistant_message(
        &mut self,
        message: Message,
        repo: &SessionRepository,
    ) -> Result<(), StoreError> {
        self.messages.push(message);
        self.persist_active(repo)
    }

    /// Hand out the next message id for the active session.
    pub fn allocate_message_id(&mut self) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }

    /// Register that a reply is on its way to the active session. Bumps
    /// the generation, so any ticket from an earlier send is dead from
    /// this point on.
    pub fn begin_reply(&mut self) -> Option<ReplyTicket> {
        let session_id = self.active_id.clone()?;
        self.reply_generation += 1;
        self.awaiting_reply = true;
        Some(ReplyTicket {
            session_id,
            generation: self.reply_generation,
        })
    }

    /// Check a ticket when its timer fires. Returns false — and the reply
    /// must be dropped — unless the target session is still active and
    /// the ticket still carries the current generation. Switching away
    /// and back does not revive a cancelled ticket.
    pub fn accept_reply(&mut self, ticket: &ReplyTicket) -> bool {
        let current = self.active_id.as_deref() == Some(ticket.session_id.as_str())
            && ticket.generation == self.reply_generation;
        if current {
            self.awaiting_reply = false;
        }
        current
    }

    /// Snapshot of the active session for persistence; `None` when no
    /// session is active.
    pub fn snapshot(&self) -> Option<Session> {
        let id = self.active_id.clone()?;
        Some(Session {
            id,
            title: derive_title(&self.messages),
            messages: self.messages.clone(),
            last_updated: Utc::now(),
            next_message_id: self.next_message_id,
        })
    }

    fn adopt(&mut self, mut session: Session) {
        session.repair_counter();
        self.reply_generation += 1;
        self.active_id = Some(session.id.clone());
        self.messages = session.messages;
        self.next_message_id = session.next_message_id;
        self.awaiting_reply = false;
    }

    fn persist_active(&self, repo: &SessionRepository) -> Result<(), StoreError> {
        match self.snapshot() {
            Some(snapshot) => repo.upsert(&snapshot),
            None => Ok(()),
        }
    }
}
