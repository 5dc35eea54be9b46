//! CampusConnect library - re-exports for testing and external use.
//!
//! This module provides public access to all the application's modules
//! for testing purposes and potential library use.

use std::sync::{Mutex, MutexGuard};

pub mod handlers;
pub mod hub;
pub mod models;
pub mod notifications;
pub mod session;
pub mod store;
pub mod templates;
pub mod views;
pub mod widget;

// ============================================================================
// Configuration
// ============================================================================

pub const DB_PATH: &str = ".campus_db";
pub const DEFAULT_PORT: u16 = 3000;

// ============================================================================
// Application State
// ============================================================================

pub struct AppState {
    store: Mutex<Box<dyn UserStore + Send>>,
    notifications: Mutex<NotificationPanel>,
    pub roster: Vec<PersonCard>,
}

impl AppState {
    pub fn new() -> Self {
        let db = sled::open(DB_PATH).expect("Failed to open database");
        Self::with_store(Box::new(SledStore::new(db)))
    }

    /// Build state around any user store. Tests hand in a memory store.
    pub fn with_store(store: Box<dyn UserStore + Send>) -> Self {
        Self {
            store: Mutex::new(store),
            notifications: Mutex::new(NotificationPanel::seeded()),
            roster: demo_roster(),
        }
    }

    /// Lock the user store for one handler's read-modify-write pass.
    /// A poisoned lock only means another handler panicked mid-write;
    /// the store itself is still usable.
    pub fn store(&self) -> MutexGuard<'_, Box<dyn UserStore + Send>> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn notifications(&self) -> MutexGuard<'_, NotificationPanel> {
        self.notifications.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// Re-export commonly used types
pub use models::{
    parse_interests, LogoutForm, Notification, PersonCard, ProfileForm, RequestAck, Role,
    SessionRequest, SignInForm, SignUpForm, UserRecord,
};

pub use store::{
    clear_current_email, current_email, find_user, load_users, save_users, set_current_email,
    upsert_user, MemoryStore, SledStore, StoreError, UserStore, CURRENT_KEY, USERS_KEY,
};

pub use session::{
    edit_profile, logout, resolve_session, save_profile, EditForm, EditOutcome, NavTarget,
    LOGOUT_PROMPT,
};

pub use views::{sync_views, PageContext, Slot, ViewContext, USER_INFO_LINE};

pub use widget::{AvatarAnchor, AvatarManager, AvatarWidget, ClickTarget};

pub use notifications::{relative_age, NotificationClick, NotificationPanel, EMPTY_MARKER};

pub use hub::{categories, demo_roster, filter_cards, initials, request_confirmation};

pub use templates::{
    base_html, display_attr, html_escape, nav_html, render_auth, render_home, render_hub,
    render_profile, STYLE,
};
