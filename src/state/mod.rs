//! Application state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `message` holds the wire-level message
//! types, `sessions` owns the persisted session collection (repository +
//! sidebar list state), and `chat` is the in-memory controller for the
//! session currently on screen.

pub mod chat;
pub mod message;
pub mod sessions;
