//! Tests for the view synchronizer.
//!
//! Each test builds a `ViewContext`, runs a sync pass against a stubbed
//! session, and asserts on the resulting slot states.

use super::*;
use crate::models::UserRecord;
use crate::session::resolve_session;
use crate::store::{self, MemoryStore, UserStore, CURRENT_KEY};
use crate::widget::AvatarManager;

fn ada() -> UserRecord {
    UserRecord::new("a@x.com", "Ada")
}

fn synced_home(session: Option<&UserRecord>) -> (ViewContext, AvatarManager) {
    let mut ctx = ViewContext::home();
    let mut avatar = AvatarManager::new();
    sync_views(session, &mut ctx, &mut avatar);
    (ctx, avatar)
}

#[test]
fn page_context_derives_from_hero_presence() {
    assert_eq!(ViewContext::home().page_context(), PageContext::Home);
    assert_eq!(ViewContext::standard().page_context(), PageContext::Generic);
    assert_eq!(
        ViewContext::with_edit_modal().page_context(),
        PageContext::Generic
    );

    // One hero alone is not a landing page.
    let mut ctx = ViewContext::home();
    ctx.user_hero = Slot::Absent;
    assert_eq!(ctx.page_context(), PageContext::Generic);
}

#[test]
fn signed_in_home_shows_user_surfaces() {
    let user = ada();
    let (ctx, avatar) = synced_home(Some(&user));

    assert!(!ctx.simple_nav.is_shown());
    assert!(ctx.full_nav.is_shown());
    assert!(!ctx.guest_hero.is_shown());
    assert!(ctx.user_hero.is_shown());
    assert!(!ctx.mobile_auth.is_shown());
    assert!(ctx.mobile_logout.is_shown());
    assert_eq!(ctx.welcome_text.as_deref(), Some("Welcome back, Ada!"));
    assert_eq!(ctx.user_info.as_deref(), Some(USER_INFO_LINE));

    let widget = avatar.widget().expect("avatar attached");
    assert_eq!(widget.glyph, "A");
}

#[test]
fn guest_home_shows_guest_surfaces() {
    let (ctx, avatar) = synced_home(None);

    assert!(ctx.simple_nav.is_shown());
    assert!(!ctx.full_nav.is_shown());
    assert!(ctx.guest_hero.is_shown());
    assert!(!ctx.user_hero.is_shown());
    assert!(ctx.mobile_auth.is_shown());
    assert!(!ctx.mobile_logout.is_shown());
    assert_eq!(ctx.welcome_text.as_deref(), Some(""));
    assert_eq!(ctx.user_info.as_deref(), Some(""));
    assert!(avatar.widget().is_none());
}

#[test]
fn sync_is_idempotent() {
    let user = ada();
    let (once_ctx, once_avatar) = synced_home(Some(&user));

    let mut twice_ctx = ViewContext::home();
    let mut twice_avatar = AvatarManager::new();
    sync_views(Some(&user), &mut twice_ctx, &mut twice_avatar);
    sync_views(Some(&user), &mut twice_ctx, &mut twice_avatar);

    assert_eq!(once_ctx, twice_ctx);
    assert_eq!(once_avatar, twice_avatar);
}

#[test]
fn generic_page_only_toggles_avatar_and_mobile_links() {
    let user = ada();
    let mut ctx = ViewContext::standard();
    let mut avatar = AvatarManager::new();

    sync_views(Some(&user), &mut ctx, &mut avatar);
    assert!(ctx.full_nav.is_shown());
    assert_eq!(ctx.simple_nav, Slot::Absent);
    assert!(!ctx.mobile_auth.is_shown());
    assert!(ctx.mobile_logout.is_shown());
    assert!(avatar.widget().is_some());

    sync_views(None, &mut ctx, &mut avatar);
    assert!(ctx.full_nav.is_shown());
    assert!(ctx.mobile_auth.is_shown());
    assert!(!ctx.mobile_logout.is_shown());
    assert!(avatar.widget().is_none());
}

#[test]
fn absent_slots_stay_absent() {
    let user = ada();
    let mut ctx = ViewContext::home();
    ctx.mobile_auth = Slot::Absent;
    ctx.mobile_logout = Slot::Absent;
    ctx.welcome_text = None;
    let mut avatar = AvatarManager::new();

    sync_views(Some(&user), &mut ctx, &mut avatar);

    assert_eq!(ctx.mobile_auth, Slot::Absent);
    assert_eq!(ctx.mobile_logout, Slot::Absent);
    assert_eq!(ctx.welcome_text, None);
}

#[test]
fn logout_transition_restores_fresh_guest_state() {
    let user = ada();
    let mut ctx = ViewContext::home();
    let mut avatar = AvatarManager::new();

    sync_views(Some(&user), &mut ctx, &mut avatar);
    sync_views(None, &mut ctx, &mut avatar);

    let (fresh_ctx, fresh_avatar) = synced_home(None);
    assert_eq!(ctx, fresh_ctx);
    assert_eq!(avatar, fresh_avatar);
}

#[test]
fn dangling_pointer_yields_guest_view() {
    let mut store = MemoryStore::new();
    store::save_users(&mut store, &[ada()]).unwrap();
    store.set(CURRENT_KEY, "ghost@x.com").unwrap();

    let session = resolve_session(&store);
    let (ctx, avatar) = synced_home(session.as_ref());

    assert!(ctx.guest_hero.is_shown());
    assert!(!ctx.user_hero.is_shown());
    assert!(avatar.widget().is_none());
}
