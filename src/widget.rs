//! The profile avatar control in the navigation bar.
//!
//! `AvatarManager` owns at most one live widget, so attaching always
//! replaces the previous instance and resynchronizing a page can never
//! leave duplicates behind. Interaction contract: left-click navigates to
//! the profile, right-click toggles the profile dropdown (suppressing the
//! native context menu), and a document-wide click outside both the avatar
//! and the dropdown closes it.

use crate::models::UserRecord;
use crate::session::NavTarget;
use crate::views::ViewContext;

// ============================================================================
// Widget
// ============================================================================

/// Where the widget sits inside the nav-right container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarAnchor {
    /// Immediately before the theme-toggle control.
    BeforeThemeToggle,
    /// Appended at the end when the page has no theme toggle.
    NavEnd,
}

/// The rendered avatar control.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarWidget {
    /// Uppercase first character of the user's name; empty for an empty
    /// name.
    pub glyph: String,
    pub tooltip: String,
    pub anchor: AvatarAnchor,
}

/// What a document-level click landed on, for the dismissal rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Avatar,
    Dropdown,
    Outside,
}

// ============================================================================
// Manager
// ============================================================================

#[derive(Debug, Default, PartialEq)]
pub struct AvatarManager {
    widget: Option<AvatarWidget>,
    dropdown_open: bool,
}

impl AvatarManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the avatar for `user`, replacing any existing widget. Pages
    /// without a nav-right container cannot host one; the call does
    /// nothing there.
    pub fn attach(&mut self, user: &UserRecord, ctx: &ViewContext) {
        if !ctx.has_nav_right {
            return;
        }
        let anchor = if ctx.has_theme_toggle {
            AvatarAnchor::BeforeThemeToggle
        } else {
            AvatarAnchor::NavEnd
        };
        self.widget = Some(AvatarWidget {
            glyph: glyph_for(&user.name),
            tooltip: format!(
                "Click to go to {}'s Profile | Right-click for menu",
                user.name
            ),
            anchor,
        });
    }

    /// Remove the widget if present; the dropdown cannot outlive its
    /// anchor. No-op when nothing is attached.
    pub fn detach(&mut self) {
        self.widget = None;
        self.dropdown_open = false;
    }

    pub fn widget(&self) -> Option<&AvatarWidget> {
        self.widget.as_ref()
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// Left-click on the avatar: go to the profile page.
    pub fn click(&self) -> Option<NavTarget> {
        self.widget.as_ref().map(|_| NavTarget::Profile)
    }

    /// Right-click on the avatar: toggle the dropdown. Returns true when
    /// the native context menu must be suppressed, which is whenever a
    /// widget exists to handle the event.
    pub fn context_menu(&mut self) -> bool {
        if self.widget.is_none() {
            return false;
        }
        self.dropdown_open = !self.dropdown_open;
        true
    }

    /// Document-wide dismissal: a click outside both the avatar and the
    /// dropdown closes the menu.
    pub fn document_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Outside {
            self.dropdown_open = false;
        }
    }
}

/// Uppercase first character of a display name.
fn glyph_for(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
