use super::*;
use crate::testing::{NOW, token_with_exp, valid_session};

#[test]
fn save_then_load_returns_equal_session() {
    let store = MemoryTokenStore::default();
    let session = valid_session().with_identity(Some("42".to_owned()), Some("Ada".to_owned()));
    store.save(&session);
    assert_eq!(store.load(), Some(session));
}

#[test]
fn save_writes_fixed_keys() {
    let store = MemoryTokenStore::default();
    let session = valid_session().with_identity(Some("42".to_owned()), None);
    store.save(&session);
    assert_eq!(store.raw(TOKEN_KEY), Some(session.token.clone()));
    assert_eq!(store.raw(EMAIL_KEY).as_deref(), Some("ada@example.com"));
    assert_eq!(store.raw(USER_ID_KEY).as_deref(), Some("42"));
    assert_eq!(store.raw(USER_NAME_KEY), None);
}

#[test]
fn save_replaces_identity_from_previous_session() {
    let store = MemoryTokenStore::default();
    store.save(&valid_session().with_identity(Some("1".to_owned()), Some("Old".to_owned())));
    store.save(&valid_session());
    assert_eq!(store.raw(USER_ID_KEY), None);
    assert_eq!(store.raw(USER_NAME_KEY), None);
}

#[test]
fn load_on_empty_store_is_none() {
    assert_eq!(MemoryTokenStore::default().load(), None);
}

#[test]
fn load_with_token_but_no_email_is_none() {
    let store = MemoryTokenStore::default();
    store.set_raw(TOKEN_KEY, &token_with_exp(NOW + 60));
    assert_eq!(store.load(), None);
}

#[test]
fn load_with_empty_values_is_none() {
    let store = MemoryTokenStore::default();
    store.set_raw(TOKEN_KEY, "");
    store.set_raw(EMAIL_KEY, "ada@example.com");
    assert_eq!(store.load(), None);
}

#[test]
fn load_with_undecodable_token_is_none() {
    let store = MemoryTokenStore::default();
    store.set_raw(TOKEN_KEY, "garbage");
    store.set_raw(EMAIL_KEY, "ada@example.com");
    assert_eq!(store.load(), None);
}

#[test]
fn load_does_not_check_expiry() {
    let store = MemoryTokenStore::default();
    store.set_raw(TOKEN_KEY, &token_with_exp(NOW - 60));
    store.set_raw(EMAIL_KEY, "ada@example.com");
    assert_eq!(store.load().map(|s| s.expires_at), Some(NOW - 60));
}

#[test]
fn clear_removes_every_session_key() {
    let store = MemoryTokenStore::default();
    store.save(&valid_session().with_identity(Some("42".to_owned()), Some("Ada".to_owned())));
    store.clear();
    for key in SESSION_KEYS {
        assert_eq!(store.raw(key), None, "{key} should be cleared");
    }
    assert!(store.is_empty());
}

#[test]
fn clear_keeps_unrelated_entries() {
    let store = MemoryTokenStore::default();
    store.set_raw("theme", "dark");
    store.save(&valid_session());
    store.clear();
    assert_eq!(store.raw("theme").as_deref(), Some("dark"));
}

#[test]
fn from_token_rejects_token_without_exp() {
    assert_eq!(Session::from_token("a.b.c", "x"), Err(TokenError::Base64));
}

#[test]
fn wipe_also_drops_tab_state() {
    let store = MemoryTokenStore::default();
    store.save(&valid_session());
    store.set_raw("theme", "dark");
    store.set_tab_raw("draft", "hello");
    store.wipe();
    assert_eq!(store.load(), None);
    assert_eq!(store.tab_raw("draft"), None);
    assert_eq!(store.raw("theme").as_deref(), Some("dark"));
}

#[test]
fn clear_keeps_tab_state() {
    let store = MemoryTokenStore::default();
    store.save(&valid_session());
    store.set_tab_raw("draft", "hello");
    store.clear();
    assert_eq!(store.tab_raw("draft").as_deref(), Some("hello"));
}
