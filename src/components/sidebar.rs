//! Collapsible sidebar listing saved conversations.

use leptos::prelude::*;

use crate::app::refresh_sessions;
use crate::state::chat::ChatState;
use crate::state::sessions::{SessionRepository, SessionsState};
use crate::util::format::short_date;

/// Conversation history list with a new-chat button. Sessions are shown
/// most recently updated first; clicking one makes it active.
#[component]
pub fn Sidebar() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let sessions = expect_context::<RwSignal<SessionsState>>();
    let repo = expect_context::<StoredValue<SessionRepository>>();

    let open = RwSignal::new(true);

    let on_new_chat = move |_| {
        let repo = repo.get_value();
        let mut result = Ok(());
        chat.update(|c| result = c.start_new_chat(&repo));
        if let Err(err) = result {
            log::error!("failed to create session: {err}");
            return;
        }
        refresh_sessions(sessions, &repo);
    };

    view! {
        <aside class="sidebar" class:sidebar--closed=move || !open.get()>
            <div class="sidebar__header">
                <h2 class="sidebar__heading">"Chat History"</h2>
                <div class="sidebar__actions">
                    <button class="sidebar__button" title="New Chat" on:click=on_new_chat>
                        "+"
                    </button>
                    <button
                        class="sidebar__button sidebar__toggle"
                        on:click=move |_| open.update(|o| *o = !*o)
                    >
                        {move || if open.get() { "\u{25C0}" } else { "\u{25B6}" }}
                    </button>
                </div>
            </div>

            <Show when=move || open.get()>
                <div class="sidebar__list">
                    {move || {
                        let items = sessions.get().items;
                        let active = chat.get().active_id;
                        if items.is_empty() {
                            return view! {
                                <div class="sidebar__empty">
                                    <p>"No chat history found"</p>
                                    <p class="sidebar__empty-hint">"Start a new conversation"</p>
                                </div>
                            }
                                .into_any();
                        }

                        view! {
                            <ul class="sidebar__items">
                                {items
                                    .into_iter()
                                    .map(|session| {
                                        let is_active = active.as_deref()
                                            == Some(session.id.as_str());
                                        let title = session.title.clone();
                                        let date = short_date(session.last_updated);
                                        let on_select = move |_| {
                                            let repo = repo.get_value();
                                            chat.update(|c| c.select_session(&session, &repo));
                                        };
                                        view! {
                                            <li
                                                class="sidebar__item"
                                                class:sidebar__item--active=is_active
                                                on:click=on_select
                                            >
                                                <p class="sidebar__item-title">{title}</p>
                                                <p class="sidebar__item-date">{date}</p>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }}
                </div>
            </Show>
        </aside>
    }
}
