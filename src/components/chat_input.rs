//! Message composer: textarea, Enter-to-send, and reply scheduling.

use std::time::Duration;

use leptos::prelude::*;

use crate::app::refresh_sessions;
use crate::sim;
use crate::sim::reply::{REPLY_DELAY_MS, generate_reply};
use crate::state::chat::ChatState;
use crate::state::sessions::{SessionRepository, SessionsState};

/// Input row for the active conversation.
///
/// Sending appends the user message (persisting it synchronously) and
/// schedules the simulated reply after the fixed delay. The reply is
/// dropped if its target session is no longer active when the timer
/// fires.
#[component]
pub fn ChatInput() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let sessions = expect_context::<RwSignal<SessionsState>>();
    let repo = expect_context::<StoredValue<SessionRepository>>();

    let input = RwSignal::new(String::new());

    let do_send = move || {
        let text = input.get();
        if text.trim().is_empty() {
            return;
        }

        let repo = repo.get_value();
        let mut sent = None;
        chat.update(|c| match c.append_user_message(&text, &repo) {
            Ok(message) => sent = message,
            Err(err) => log::error!("failed to persist user message: {err}"),
        });
        let Some(user_message) = sent else {
            return;
        };

        input.set(String::new());
        refresh_sessions(sessions, &repo);

        let mut ticket = None;
        chat.update(|c| ticket = c.begin_reply());
        let Some(ticket) = ticket else {
            return;
        };

        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(Duration::from_millis(REPLY_DELAY_MS)).await;
            chat.update(|c| {
                if !c.accept_reply(&ticket) {
                    return;
                }
                let reply = generate_reply(
                    &user_message.content,
                    c.allocate_message_id(),
                    &mut sim::task_rng(),
                );
                if let Err(err) = c.append_assistant_message(reply, &repo) {
                    log::error!("failed to persist simulated reply: {err}");
                }
            });
            refresh_sessions(sessions, &repo);
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-input">
            <textarea
                class="chat-input__textarea"
                placeholder="Message Chatboard..."
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>
            <button
                class="btn btn--primary chat-input__send"
                title="Send message"
                disabled=move || !can_send()
                on:click=move |_| do_send()
            >
                "Send"
            </button>
        </div>
    }
}
