//! Session-driven view synchronization.
//!
//! Every page region that depends on authentication state is a named slot
//! in a `ViewContext`. A synchronization pass projects the resolved
//! session onto those slots, so the visible state is always re-derivable
//! from the store alone and re-running the pass changes nothing.

#[cfg(test)]
#[path = "views_test.rs"]
mod views_test;

use crate::models::UserRecord;
use crate::widget::AvatarManager;

/// Sub-line shown under the welcome banner for a signed-in user.
pub const USER_INFO_LINE: &str = "Ready to connect with your peer community?";

// ============================================================================
// Slots
// ============================================================================

/// One page region. Pages omit regions they do not have; show/hide on an
/// absent slot is silently skipped rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Absent,
    Hidden,
    Shown,
}

impl Slot {
    pub fn present(self) -> bool {
        !matches!(self, Slot::Absent)
    }

    pub fn is_shown(self) -> bool {
        matches!(self, Slot::Shown)
    }

    pub fn show(&mut self) {
        if *self != Slot::Absent {
            *self = Slot::Shown;
        }
    }

    pub fn hide(&mut self) {
        if *self != Slot::Absent {
            *self = Slot::Hidden;
        }
    }
}

/// Which synchronization behavior a page gets, derived from the regions
/// it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageContext {
    /// Landing page with both hero sections; navs and heroes toggle.
    Home,
    /// Any other page; the nav is fixed and only the avatar and mobile
    /// auth links respond to the session.
    Generic,
}

// ============================================================================
// View context
// ============================================================================

/// The session-dependent regions of one page.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewContext {
    pub simple_nav: Slot,
    pub full_nav: Slot,
    pub guest_hero: Slot,
    pub user_hero: Slot,
    /// Welcome banner content; `None` when the page has no banner.
    pub welcome_text: Option<String>,
    /// Sub-line under the banner; `None` when the page has none.
    pub user_info: Option<String>,
    pub mobile_auth: Slot,
    pub mobile_logout: Slot,
    pub has_nav_right: bool,
    pub has_theme_toggle: bool,
    pub has_edit_modal: bool,
}

impl ViewContext {
    /// The landing page: guest-facing regions start visible.
    pub fn home() -> Self {
        Self {
            simple_nav: Slot::Shown,
            full_nav: Slot::Hidden,
            guest_hero: Slot::Shown,
            user_hero: Slot::Hidden,
            welcome_text: Some(String::new()),
            user_info: Some(String::new()),
            mobile_auth: Slot::Shown,
            mobile_logout: Slot::Hidden,
            has_nav_right: true,
            has_theme_toggle: true,
            has_edit_modal: false,
        }
    }

    /// Any non-landing page: no heroes, one always-visible nav.
    pub fn standard() -> Self {
        Self {
            simple_nav: Slot::Absent,
            full_nav: Slot::Shown,
            guest_hero: Slot::Absent,
            user_hero: Slot::Absent,
            welcome_text: None,
            user_info: None,
            mobile_auth: Slot::Shown,
            mobile_logout: Slot::Hidden,
            has_nav_right: true,
            has_theme_toggle: true,
            has_edit_modal: false,
        }
    }

    /// The profile page, which additionally carries the edit-profile
    /// modal.
    pub fn with_edit_modal() -> Self {
        Self {
            has_edit_modal: true,
            ..Self::standard()
        }
    }

    /// A page counts as Home only when both hero sections exist.
    pub fn page_context(&self) -> PageContext {
        if self.guest_hero.present() && self.user_hero.present() {
            PageContext::Home
        } else {
            PageContext::Generic
        }
    }
}

// ============================================================================
// Synchronization pass
// ============================================================================

/// Project the session onto the page once. Safe to re-run at any time;
/// the result depends only on `(session, page regions)`.
pub fn sync_views(
    session: Option<&UserRecord>,
    ctx: &mut ViewContext,
    avatar: &mut AvatarManager,
) {
    match ctx.page_context() {
        PageContext::Home => sync_home(session, ctx, avatar),
        PageContext::Generic => sync_generic(session, ctx, avatar),
    }
}

fn sync_home(session: Option<&UserRecord>, ctx: &mut ViewContext, avatar: &mut AvatarManager) {
    match session {
        Some(user) => {
            ctx.simple_nav.hide();
            ctx.full_nav.show();
            ctx.guest_hero.hide();
            ctx.user_hero.show();
            ctx.mobile_auth.hide();
            ctx.mobile_logout.show();
            set_text(&mut ctx.welcome_text, &format!("Welcome back, {}!", user.name));
            set_text(&mut ctx.user_info, USER_INFO_LINE);
            avatar.attach(user, ctx);
        }
        None => {
            ctx.simple_nav.show();
            ctx.full_nav.hide();
            ctx.guest_hero.show();
            ctx.user_hero.hide();
            ctx.mobile_auth.show();
            ctx.mobile_logout.hide();
            set_text(&mut ctx.welcome_text, "");
            set_text(&mut ctx.user_info, "");
            avatar.detach();
        }
    }
}

fn sync_generic(session: Option<&UserRecord>, ctx: &mut ViewContext, avatar: &mut AvatarManager) {
    match session {
        Some(user) => {
            ctx.mobile_auth.hide();
            ctx.mobile_logout.show();
            avatar.attach(user, ctx);
        }
        None => {
            ctx.mobile_auth.show();
            ctx.mobile_logout.hide();
            avatar.detach();
        }
    }
}

fn set_text(slot: &mut Option<String>, value: &str) {
    if let Some(text) = slot {
        *text = value.to_string();
    }
}
