use super::*;
use crate::util::persistence::MemoryStore;

fn repo() -> SessionRepository {
    SessionRepository::new(Arc::new(MemoryStore::default()))
}

fn user_message(id: u64, content: &str) -> Message {
    Message {
        id,
        role: Role::User,
        content: content.to_owned(),
        timestamp: Utc::now(),
        chart_data: None,
    }
}

// =============================================================
// Title derivation
// =============================================================

#[test]
fn derive_title_defaults_without_user_message() {
    let session = Session::seeded();
    assert_eq!(derive_title(&session.messages), DEFAULT_TITLE);
}

#[test]
fn derive_title_uses_first_user_message_verbatim_when_short() {
    let messages = vec![user_message(2, "Hello there")];
    assert_eq!(derive_title(&messages), "Hello there");
}

#[test]
fn derive_title_truncates_long_messages_with_ellipsis() {
    let messages = vec![user_message(2, "abcdefghijklmnopqrstuvwxyz")];
    assert_eq!(derive_title(&messages), "abcdefghijklmnopqrstuvwxy...");
}

#[test]
fn derive_title_keeps_exactly_25_chars_unchanged() {
    let content = "a".repeat(25);
    let messages = vec![user_message(2, &content)];
    assert_eq!(derive_title(&messages), content);
}

#[test]
fn derive_title_truncates_on_char_boundaries() {
    let content = "é".repeat(30);
    let messages = vec![user_message(2, &content)];
    assert_eq!(derive_title(&messages), format!("{}...", "é".repeat(25)));
}

// =============================================================
// Repository
// =============================================================

#[test]
fn load_all_is_empty_without_stored_key() {
    assert!(repo().load_all().unwrap().is_empty());
}

#[test]
fn load_all_fails_on_corrupt_history() {
    let store = Arc::new(MemoryStore::default());
    store.write(crate::util::persistence::HISTORY_KEY, "{not json");
    let repo = SessionRepository::new(store);
    assert!(matches!(repo.load_all(), Err(StoreError::Decode(_))));
}

#[test]
fn create_session_seeds_a_single_greeting() {
    let repo = repo();
    let session = repo.create_session().unwrap();

    assert_eq!(session.messages.len(), 1);
    assert_eq!(session.messages[0].id, 1);
    assert_eq!(session.messages[0].role, Role::Assistant);
    assert_eq!(session.messages[0].content, GREETING);
    assert_eq!(session.title, DEFAULT_TITLE);
    assert_eq!(session.next_message_id, 2);
}

#[test]
fn create_session_ids_are_unique_and_persisted() {
    let repo = repo();
    let a = repo.create_session().unwrap();
    let b = repo.create_session().unwrap();

    assert_ne!(a.id, b.id);
    let stored = repo.load_all().unwrap();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().any(|s| s.id == a.id));
    assert!(stored.iter().any(|s| s.id == b.id));
}

#[test]
fn upsert_appends_then_replaces_in_place() {
    let repo = repo();
    let first = repo.create_session().unwrap();
    let second = repo.create_session().unwrap();

    let mut changed = first.clone();
    changed.messages.push(user_message(2, "hello"));
    repo.upsert(&changed).unwrap();

    let stored = repo.load_all().unwrap();
    assert_eq!(stored.len(), 2);
    // Replaced entry keeps its original position.
    assert_eq!(stored[0].id, first.id);
    assert_eq!(stored[0].messages.len(), 2);
    assert_eq!(stored[1].id, second.id);
}

#[test]
fn upsert_is_idempotent_for_the_same_session() {
    let repo = repo();
    let session = repo.create_session().unwrap();

    repo.upsert(&session).unwrap();
    repo.upsert(&session).unwrap();

    assert_eq!(repo.load_all().unwrap().len(), 1);
}

#[test]
fn upsert_recomputes_title_from_messages() {
    let repo = repo();
    let mut session = repo.create_session().unwrap();
    session.messages.push(user_message(
        2,
        "Please summarize quarterly revenue for me",
    ));
    session.title = "stale title".to_owned();

    repo.upsert(&session).unwrap();

    let stored = repo.find_by_id(&session.id).unwrap().unwrap();
    assert_eq!(stored.title, derive_title(&stored.messages));
    assert_eq!(stored.title, "Please summarize quarterl...");
}

#[test]
fn upsert_refreshes_last_updated() {
    let repo = repo();
    let session = repo.create_session().unwrap();
    let before = repo.find_by_id(&session.id).unwrap().unwrap().last_updated;

    repo.upsert(&session).unwrap();

    let after = repo.find_by_id(&session.id).unwrap().unwrap().last_updated;
    assert!(after >= before);
}

#[test]
fn sessions_round_trip_through_storage() {
    let repo = repo();
    let mut session = repo.create_session().unwrap();
    session.messages.push(user_message(2, "round trip"));
    repo.upsert(&session).unwrap();

    let stored = repo.find_by_id(&session.id).unwrap().unwrap();
    assert_eq!(stored.messages.len(), session.messages.len());
    for (stored_msg, original) in stored.messages.iter().zip(&session.messages) {
        assert_eq!(stored_msg.id, original.id);
        assert_eq!(stored_msg.role, original.role);
        assert_eq!(stored_msg.content, original.content);
        assert_eq!(stored_msg.timestamp, original.timestamp);
    }
}

#[test]
fn sorted_by_recency_is_descending_and_nondestructive() {
    let repo = repo();
    let a = repo.create_session().unwrap();
    let b = repo.create_session().unwrap();

    // Touch the older session so it becomes the most recent.
    repo.upsert(&a).unwrap();

    let sorted = repo.sorted_by_recency().unwrap();
    assert_eq!(sorted[0].id, a.id);
    assert_eq!(sorted[1].id, b.id);

    // Stored order is untouched.
    let stored = repo.load_all().unwrap();
    assert_eq!(stored[0].id, a.id);
    assert_eq!(stored[1].id, b.id);
}

#[test]
fn find_by_id_misses_cleanly() {
    let repo = repo();
    repo.create_session().unwrap();
    assert!(repo.find_by_id("no-such-id").unwrap().is_none());
}

#[test]
fn current_session_pointer_round_trips() {
    let repo = repo();
    assert!(repo.current_session_id().is_none());
    repo.set_current_session_id("abc-123");
    assert_eq!(repo.current_session_id().as_deref(), Some("abc-123"));
}

#[test]
fn load_all_repairs_missing_id_counter() {
    // Data written before `next_message_id` existed: field absent.
    let store = Arc::new(MemoryStore::default());
    let raw = serde_json::json!([{
        "id": "legacy",
        "title": "legacy",
        "messages": [
            {"id": 1, "role": "assistant", "content": "hi", "timestamp": Utc::now()},
            {"id": 4, "role": "user", "content": "yo", "timestamp": Utc::now()}
        ],
        "last_updated": Utc::now()
    }])
    .to_string();
    store.write(crate::util::persistence::HISTORY_KEY, &raw);

    let repo = SessionRepository::new(store);
    let sessions = repo.load_all().unwrap();
    assert_eq!(sessions[0].next_message_id, 5);
}
