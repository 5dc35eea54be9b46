//! Session resolution and the session-scoped user actions.
//!
//! `resolve_session` answers "who is signed in" from the store alone. The
//! logout and edit flows are plain functions over an injected store plus,
//! for logout, an injected confirmation capability, so the interactive
//! dialog can be stubbed in tests.

use crate::models::{parse_interests, ProfileForm, UserRecord};
use crate::store::{self, StoreError, UserStore};

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

// ============================================================================
// Navigation Targets
// ============================================================================

/// Pages the session actions can route to. The page server owns the
/// mapping from target to path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Profile,
    SignIn,
}

impl NavTarget {
    pub fn href(&self) -> &'static str {
        match self {
            NavTarget::Profile => "/profile",
            NavTarget::SignIn => "/auth#signin",
        }
    }
}

// ============================================================================
// Session Resolver
// ============================================================================

/// Resolve the signed-in user, if any. A missing pointer and a pointer
/// with no matching record both read as signed out; this never fails.
pub fn resolve_session(store: &dyn UserStore) -> Option<UserRecord> {
    let email = store::current_email(store)?;
    store::find_user(store, &email)
}

// ============================================================================
// Logout
// ============================================================================

/// Prompt shown before signing out.
pub const LOGOUT_PROMPT: &str = "Are you sure you want to logout?";

/// Clear the session pointer after an affirmative confirmation. Returns
/// the page to route to, or `None` when the user declined (store
/// untouched).
pub fn logout(
    store: &mut dyn UserStore,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<Option<NavTarget>, StoreError> {
    if !confirm(LOGOUT_PROMPT) {
        return Ok(None);
    }
    store::clear_current_email(store)?;
    Ok(Some(NavTarget::SignIn))
}

// ============================================================================
// Profile Editing
// ============================================================================

/// Edit-modal field values, all strings the way the form renders them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditForm {
    pub name: String,
    pub role: String,
    pub year: String,
    pub stream: String,
    /// Comma-joined, e.g. "a, b"; empty when the record has no interests.
    pub interests: String,
}

impl EditForm {
    pub fn from_record(user: &UserRecord) -> Self {
        EditForm {
            name: user.name.clone(),
            role: user.role.clone().unwrap_or_default(),
            year: user.year.clone().unwrap_or_default(),
            stream: user.stream.clone().unwrap_or_default(),
            interests: user.interests_joined(),
        }
    }
}

/// What the Edit Profile affordance does on the current page.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// The page has the edit modal: open it with these field values.
    Opened(EditForm),
    /// No modal here: go to the profile page instead.
    Redirect(NavTarget),
}

/// Decide the edit action. Without a resolved session the form opens
/// empty; every field defaults to the empty string.
pub fn edit_profile(session: Option<&UserRecord>, has_edit_modal: bool) -> EditOutcome {
    if !has_edit_modal {
        return EditOutcome::Redirect(NavTarget::Profile);
    }
    EditOutcome::Opened(session.map(EditForm::from_record).unwrap_or_default())
}

/// Write edited fields back onto the record with this email. The email
/// itself is immutable here, which keeps record keys unique. A pointer to
/// a missing record writes nothing.
pub fn save_profile(
    store: &mut dyn UserStore,
    email: &str,
    form: &ProfileForm,
) -> Result<(), StoreError> {
    let mut user = match store::find_user(store, email) {
        Some(u) => u,
        None => return Ok(()),
    };

    let name = form.name.trim();
    if !name.is_empty() {
        user.name = name.to_string();
    }
    user.role = none_if_blank(&form.role);
    user.year = none_if_blank(&form.year);
    user.stream = none_if_blank(&form.stream);
    user.interests = parse_interests(&form.interests);

    store::upsert_user(store, user)
}

fn none_if_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
