//! Leptos view components.

pub mod chart_panel;
pub mod chat_input;
pub mod message_thread;
pub mod sidebar;
