//! Tests for session resolution and the logout/edit flows.
//!
//! Everything runs against `MemoryStore` with stubbed confirmation
//! closures; no sled database or interactive dialog is involved.

use super::*;
use crate::models::{ProfileForm, UserRecord};
use crate::store::{self, MemoryStore, UserStore, CURRENT_KEY, USERS_KEY};

// ============================================================================
// Helpers
// ============================================================================

fn mock_user(email: &str, name: &str) -> UserRecord {
    UserRecord::new(email, name)
}

/// Store seeded with `users` and, optionally, a session pointer.
fn store_with(users: &[UserRecord], current: Option<&str>) -> MemoryStore {
    let mut store = MemoryStore::new();
    store::save_users(&mut store, users).unwrap();
    if let Some(email) = current {
        store::set_current_email(&mut store, email).unwrap();
    }
    store
}

// ============================================================================
// Session Resolution
// ============================================================================

#[test]
fn resolve_none_without_pointer() {
    let store = store_with(&[mock_user("a@x.com", "Ada")], None);
    assert_eq!(resolve_session(&store), None);
}

#[test]
fn resolve_none_on_dangling_pointer() {
    let store = store_with(&[mock_user("a@x.com", "Ada")], Some("gone@x.com"));
    assert_eq!(resolve_session(&store), None);
}

#[test]
fn resolve_finds_matching_record() {
    let ada = mock_user("a@x.com", "Ada");
    let store = store_with(&[mock_user("b@x.com", "Bob"), ada.clone()], Some("a@x.com"));
    assert_eq!(resolve_session(&store), Some(ada));
}

#[test]
fn resolve_survives_malformed_user_list() {
    let mut store = MemoryStore::new();
    store.set(USERS_KEY, "][ not json").unwrap();
    store.set(CURRENT_KEY, "a@x.com").unwrap();
    assert_eq!(resolve_session(&store), None);
}

// ============================================================================
// Logout
// ============================================================================

#[test]
fn logout_confirmed_clears_pointer() {
    let mut store = store_with(&[mock_user("a@x.com", "Ada")], Some("a@x.com"));

    let target = logout(&mut store, |_| true).unwrap();

    assert_eq!(target, Some(NavTarget::SignIn));
    assert_eq!(store::current_email(&store), None);
    // The user list itself is untouched
    assert_eq!(store::load_users(&store).len(), 1);
}

#[test]
fn logout_declined_changes_nothing() {
    let mut store = store_with(&[mock_user("a@x.com", "Ada")], Some("a@x.com"));
    let before_users = store.get(USERS_KEY);
    let before_current = store.get(CURRENT_KEY);

    let target = logout(&mut store, |_| false).unwrap();

    assert_eq!(target, None);
    assert_eq!(store.get(USERS_KEY), before_users);
    assert_eq!(store.get(CURRENT_KEY), before_current);
}

#[test]
fn logout_passes_prompt_to_confirmer() {
    let mut store = store_with(&[], None);
    let mut seen = String::new();

    logout(&mut store, |prompt| {
        seen = prompt.to_string();
        false
    })
    .unwrap();

    assert_eq!(seen, LOGOUT_PROMPT);
}

#[test]
fn logout_target_routes_to_sign_in() {
    assert_eq!(NavTarget::SignIn.href(), "/auth#signin");
    assert_eq!(NavTarget::Profile.href(), "/profile");
}

// ============================================================================
// Edit Profile
// ============================================================================

#[test]
fn edit_without_modal_redirects_to_profile() {
    let ada = mock_user("a@x.com", "Ada");
    assert_eq!(
        edit_profile(Some(&ada), false),
        EditOutcome::Redirect(NavTarget::Profile)
    );
}

#[test]
fn edit_prefills_empty_interests_as_empty_string() {
    let ada = mock_user("a@x.com", "Ada");

    match edit_profile(Some(&ada), true) {
        EditOutcome::Opened(form) => {
            assert_eq!(form.name, "Ada");
            assert_eq!(form.role, "");
            assert_eq!(form.interests, "");
        }
        other => panic!("expected opened form, got {:?}", other),
    }
}

#[test]
fn edit_prefills_interests_comma_joined() {
    let mut ada = mock_user("a@x.com", "Ada");
    ada.interests = vec!["a".to_string(), "b".to_string()];
    ada.role = Some("mentor".to_string());

    match edit_profile(Some(&ada), true) {
        EditOutcome::Opened(form) => {
            assert_eq!(form.interests, "a, b");
            assert_eq!(form.role, "mentor");
        }
        other => panic!("expected opened form, got {:?}", other),
    }
}

#[test]
fn edit_as_guest_opens_blank_form() {
    assert_eq!(
        edit_profile(None, true),
        EditOutcome::Opened(EditForm::default())
    );
}

// ============================================================================
// Save Profile
// ============================================================================

fn profile_form(name: &str, role: &str, interests: &str) -> ProfileForm {
    ProfileForm {
        name: name.to_string(),
        role: role.to_string(),
        year: String::new(),
        stream: String::new(),
        interests: interests.to_string(),
    }
}

#[test]
fn save_profile_rewrites_fields_keeps_email() {
    let mut store = store_with(&[mock_user("a@x.com", "Ada")], Some("a@x.com"));

    save_profile(
        &mut store,
        "a@x.com",
        &profile_form("Ada Lovelace", "mentor", "compilers, math"),
    )
    .unwrap();

    let users = store::load_users(&store);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "a@x.com");
    assert_eq!(users[0].name, "Ada Lovelace");
    assert_eq!(users[0].role.as_deref(), Some("mentor"));
    assert_eq!(users[0].interests, vec!["compilers", "math"]);
}

#[test]
fn save_profile_blank_fields_become_absent() {
    let mut ada = mock_user("a@x.com", "Ada");
    ada.role = Some("mentor".to_string());
    ada.interests = vec!["x".to_string()];
    let mut store = store_with(&[ada], Some("a@x.com"));

    save_profile(&mut store, "a@x.com", &profile_form("Ada", "  ", "")).unwrap();

    let saved = store::find_user(&store, "a@x.com").unwrap();
    assert_eq!(saved.role, None);
    assert!(saved.interests.is_empty());
}

#[test]
fn save_profile_blank_name_keeps_old_name() {
    let mut store = store_with(&[mock_user("a@x.com", "Ada")], Some("a@x.com"));

    save_profile(&mut store, "a@x.com", &profile_form("   ", "student", "")).unwrap();

    let saved = store::find_user(&store, "a@x.com").unwrap();
    assert_eq!(saved.name, "Ada");
    assert_eq!(saved.role.as_deref(), Some("student"));
}

#[test]
fn save_profile_unknown_email_writes_nothing() {
    let mut store = store_with(&[mock_user("a@x.com", "Ada")], None);

    save_profile(&mut store, "ghost@x.com", &profile_form("Ghost", "", "")).unwrap();

    let users = store::load_users(&store);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ada");
}
