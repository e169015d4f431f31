//! Root application component and shared context wiring.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::chat_input::ChatInput;
use crate::components::message_thread::MessageThread;
use crate::components::sidebar::Sidebar;
use crate::state::chat::ChatState;
use crate::state::sessions::{SessionRepository, SessionsState};
use crate::util::persistence::BrowserStore;

/// Reload the sidebar list from the repository. Called after every
/// persisted mutation so the sidebar tracks titles and recency.
pub fn refresh_sessions(sessions: RwSignal<SessionsState>, repo: &SessionRepository) {
    match repo.sorted_by_recency() {
        Ok(items) => sessions.update(|s| s.items = items),
        Err(err) => log::error!("failed to reload session list: {err}"),
    }
}

/// Root component.
///
/// Provides the repository and reactive state contexts, restores the
/// last active session from storage, and renders the widget — or an
/// error state when stored history exists but cannot be decoded.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let repo = StoredValue::new(SessionRepository::new(Arc::new(BrowserStore)));
    let chat = RwSignal::new(ChatState::default());
    let sessions = RwSignal::new(SessionsState::default());

    provide_context(repo);
    provide_context(chat);
    provide_context(sessions);

    repo.with_value(|r| {
        chat.update(|c| c.initialize(r));
        refresh_sessions(sessions, r);
    });

    view! {
        <Title text="Chatboard"/>

        {move || match chat.get().load_error {
            Some(err) => view! {
                <div class="chat-app chat-app--failed">
                    <p class="chat-app__error">
                        "Saved conversations could not be loaded: " {err}
                    </p>
                </div>
            }
                .into_any(),
            None => view! {
                <div class="chat-app">
                    <Sidebar/>
                    <main class="chat-app__main">
                        <MessageThread/>
                        <ChatInput/>
                    </main>
                </div>
            }
                .into_any(),
        }}
    }
}
