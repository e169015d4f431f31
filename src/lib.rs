//! # chatboard
//!
//! Leptos + WASM chat widget with locally persisted conversations.
//!
//! There is no server: assistant replies are fabricated by the `sim`
//! module after a short artificial delay, and the full conversation
//! history lives in browser `localStorage`. The crate contains the root
//! component, presentation components, application state (the session
//! repository and the active-session controller), the reply simulator,
//! and the storage adapter glue.

pub mod app;
pub mod components;
pub mod sim;
pub mod state;
pub mod util;
