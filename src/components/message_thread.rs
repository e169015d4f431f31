//! Message thread: role-aligned bubbles with inline charts.

#[cfg(test)]
#[path = "message_thread_test.rs"]
mod message_thread_test;

use std::hash::{DefaultHasher, Hash, Hasher};

use leptos::prelude::*;

use crate::components::chart_panel::ChartPanel;
use crate::state::chat::ChatState;
use crate::state::message::Role;
use crate::util::format::time_of_day;

/// Seed for a message's chart data. Stable across re-renders of the
/// thread, so appending new messages does not reshuffle earlier charts.
fn chart_seed(session_id: &str, message_id: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    session_id.hash(&mut hasher);
    message_id.hash(&mut hasher);
    hasher.finish()
}

/// Scrollable list of the active session's messages. Auto-scrolls to the
/// bottom whenever a message is appended.
#[component]
pub fn MessageThread() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let thread_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.get().messages.len();
        if let Some(el) = thread_ref.get() {
            let scroll_height = el.scroll_height();
            el.set_scroll_top(scroll_height);
        }
    });

    view! {
        <div class="message-thread" node_ref=thread_ref>
            {move || {
                let state = chat.get();
                let session_id = state.active_id.clone().unwrap_or_default();
                state
                    .messages
                    .iter()
                    .map(|msg| {
                        let is_user = msg.role == Role::User;
                        let content = msg.content.clone();
                        let stamp = time_of_day(msg.timestamp);
                        let chart = msg.chart_data.clone();
                        let seed = chart_seed(&session_id, msg.id);
                        view! {
                            <div
                                class="message"
                                class:message--user=is_user
                                class:message--assistant=!is_user
                            >
                                <div class="message__bubble">
                                    <p class="message__content">{content}</p>
                                    {chart.map(|spec| view! { <ChartPanel spec=spec seed=seed/> })}
                                    <p class="message__time">{stamp}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            {move || {
                chat.get()
                    .awaiting_reply
                    .then(|| view! { <div class="message-thread__typing">"Thinking..."</div> })
            }}
        </div>
    }
}
