//! Shared HTML components for the CampusConnect pages.
//!
//! Contains the navigation bars, notifications dropdown, mobile menu, and
//! base HTML template. Navigation markup is a direct projection of a
//! synced `ViewContext`: hidden slots render with an inline display
//! override, absent slots render nothing.

use chrono::Utc;

use crate::notifications::{relative_age, NotificationPanel, EMPTY_MARKER};
use crate::views::{Slot, ViewContext};
use crate::widget::{AvatarAnchor, AvatarManager};

use super::styles::STYLE;

// ============================================================================
// Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Inline style for a slot. Absent slots are the caller's job to skip.
pub fn display_attr(slot: Slot) -> &'static str {
    if slot.is_shown() {
        ""
    } else {
        r#" style="display: none""#
    }
}

// ============================================================================
// Navigation
// ============================================================================

pub fn nav_html(ctx: &ViewContext, avatar: &AvatarManager, panel: &NotificationPanel) -> String {
    let mut html = String::new();

    if ctx.simple_nav.present() {
        html.push_str(&format!(
            r#"<nav class="nav"{display}>
                <a href="/" class="nav-brand">CampusConnect</a>
                <span class="spacer"></span>
                <a href="/auth#signin">Sign In</a>
                <a href="/auth#signup">Sign Up</a>
                {theme}
            </nav>"#,
            display = display_attr(ctx.simple_nav),
            theme = if ctx.has_theme_toggle {
                theme_button(false)
            } else {
                String::new()
            },
        ));
    }

    if ctx.full_nav.present() {
        let nav_right = if ctx.has_nav_right {
            nav_right_html(ctx, avatar, panel)
        } else {
            String::new()
        };

        html.push_str(&format!(
            r#"<nav class="nav full-nav" id="full-nav"{display}>
                <a href="/" class="nav-brand">CampusConnect</a>
                <div class="nav-links">
                    <a href="/">Home</a>
                    <a href="/hub">Mentorship Hub</a>
                    <a href="/profile">Profile</a>
                </div>
                <span class="spacer"></span>
                {nav_right}
            </nav>"#,
            display = display_attr(ctx.full_nav),
            nav_right = nav_right,
        ));
    }

    html.push_str(&mobile_menu_html(ctx));
    html
}

fn theme_button(with_id: bool) -> String {
    let id_attr = if with_id { r#" id="theme-toggle""# } else { "" };
    format!(
        r#"<button class="theme-toggle"{} title="Toggle theme"><span class="theme-icon">🌙</span></button>"#,
        id_attr
    )
}

fn nav_right_html(ctx: &ViewContext, avatar: &AvatarManager, panel: &NotificationPanel) -> String {
    let avatar_html = match avatar.widget() {
        Some(widget) => format!(
            r#"<div class="nav-avatar" id="nav-avatar" title="{}">{}</div>"#,
            html_escape(&widget.tooltip),
            html_escape(&widget.glyph),
        ),
        None => String::new(),
    };

    let theme = if ctx.has_theme_toggle {
        theme_button(true)
    } else {
        String::new()
    };

    // The avatar sits immediately before the theme toggle when one
    // exists, otherwise at the end of the container.
    let (before_theme, at_end) = match avatar.widget().map(|w| w.anchor) {
        Some(AvatarAnchor::BeforeThemeToggle) => (avatar_html, String::new()),
        Some(AvatarAnchor::NavEnd) => (String::new(), avatar_html),
        None => (String::new(), String::new()),
    };

    let profile_menu = if avatar.widget().is_some() {
        r#"<div class="profile-menu" id="profile-menu">
                <button onclick="viewProfile()">View Profile</button>
                <button onclick="editProfile()">Edit Profile</button>
                <button onclick="logoutConfirm()">Logout</button>
            </div>"#
    } else {
        ""
    };

    format!(
        r#"<div class="nav-right" id="nav-right">
            {notifications}
            {before_theme}{theme}
            {profile_menu}
            <button class="menu-toggle" id="menu-toggle">&#9776;</button>
            {at_end}
        </div>"#,
        notifications = notifications_html(panel),
        before_theme = before_theme,
        theme = theme,
        profile_menu = profile_menu,
        at_end = at_end,
    )
}

fn notifications_html(panel: &NotificationPanel) -> String {
    let badge = match panel.badge() {
        Some(count) => format!(
            r#"<span class="notification-badge" id="notification-badge">{}</span>"#,
            count
        ),
        None => {
            r#"<span class="notification-badge" id="notification-badge" style="display: none">0</span>"#
                .to_string()
        }
    };

    let mut list = String::new();
    if panel.is_empty() {
        list.push_str(&format!(
            r#"<div class="no-notifications">{}</div>"#,
            EMPTY_MARKER
        ));
    } else {
        let now = Utc::now();
        for item in panel.items() {
            let class = if item.unread {
                "notification-item unread"
            } else {
                "notification-item"
            };
            list.push_str(&format!(
                r#"<div class="{class}">
                    <div class="notification-title">{title}</div>
                    <div class="notification-body">{body}</div>
                    <div class="notification-time">{age}</div>
                </div>"#,
                class = class,
                title = html_escape(&item.title),
                body = html_escape(&item.body),
                age = relative_age(item.created_at, now),
            ));
        }
    }

    let active = if panel.is_open() { " active" } else { "" };

    format!(
        r#"<div class="notifications-wrapper">
            <button class="notifications-btn" id="notifications-btn" title="Notifications">🔔{badge}</button>
            <div class="notifications-dropdown{active}" id="notifications-dropdown">
                <div class="notifications-header">
                    <span>Notifications</span>
                    <span>
                        <button id="mark-all-read">Mark all read</button>
                        <button id="clear-all-notifications">Clear all</button>
                    </span>
                </div>
                <div class="notifications-list">{list}</div>
            </div>
        </div>"#,
        badge = badge,
        active = active,
        list = list,
    )
}

fn mobile_menu_html(ctx: &ViewContext) -> String {
    let auth_links = if ctx.mobile_auth.present() {
        format!(
            r#"<div id="mobile-auth"{}>
                <a href="/auth#signin">Sign In</a>
                <a href="/auth#signup">Sign Up</a>
            </div>"#,
            display_attr(ctx.mobile_auth)
        )
    } else {
        String::new()
    };

    let logout_link = if ctx.mobile_logout.present() {
        format!(
            r#"<div id="mobile-logout"{}>
                <button onclick="logoutConfirm()">Logout</button>
            </div>"#,
            display_attr(ctx.mobile_logout)
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="mobile-menu" id="mobile-menu">
            <a href="/">Home</a>
            <a href="/hub">Mentorship Hub</a>
            <a href="/profile">Profile</a>
            {auth}
            {logout}
        </div>"#,
        auth = auth_links,
        logout = logout_link,
    )
}

// ============================================================================
// Base HTML Template
// ============================================================================

pub fn base_html(title: &str, nav: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="light">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    {nav}
    <div class="container">
        {content}
    </div>
    <form id="logout-form" method="post" action="/logout" style="display: none">
        <input type="hidden" name="confirmed" value="true">
    </form>
    {script}
</body>
</html>"#,
        title = html_escape(title),
        nav = nav,
        content = content,
        script = shared_script(),
    )
}

// ============================================================================
// Shared Page Script
// ============================================================================

fn shared_script() -> &'static str {
    r##"<script>
    (function() {
        // Theme
        function initializeTheme() {
            const saved = localStorage.getItem('cc_theme') || 'light';
            document.documentElement.setAttribute('data-theme', saved);
            updateThemeIcon(saved);
        }

        function updateThemeIcon(theme) {
            document.querySelectorAll('.theme-icon').forEach(icon => {
                icon.textContent = theme === 'dark' ? '☀️' : '🌙';
            });
        }

        function toggleTheme() {
            const current = document.documentElement.getAttribute('data-theme');
            const next = current === 'dark' ? 'light' : 'dark';
            document.documentElement.setAttribute('data-theme', next);
            localStorage.setItem('cc_theme', next);
            updateThemeIcon(next);
        }

        // Toast
        function showToast(message) {
            const toast = document.createElement('div');
            toast.className = 'toast';
            const check = document.createElement('span');
            check.textContent = '✓';
            const text = document.createElement('span');
            text.textContent = message;
            toast.appendChild(check);
            toast.appendChild(text);
            document.body.appendChild(toast);
            setTimeout(() => toast.classList.add('visible'), 100);
            setTimeout(() => {
                toast.classList.remove('visible');
                setTimeout(() => toast.remove(), 500);
            }, 4000);
        }

        // Navigation actions
        function viewProfile() {
            window.location.href = '/profile';
        }

        function editProfile() {
            const modal = document.getElementById('edit-modal');
            if (modal) {
                modal.style.display = 'flex';
            } else {
                window.location.href = '/profile';
            }
        }

        function logoutConfirm() {
            if (!confirm('Are you sure you want to logout?')) return;
            const form = document.getElementById('logout-form');
            if (form) form.submit();
        }

        function toggleProfileDropdown() {
            const menu = document.getElementById('profile-menu');
            if (menu) menu.classList.toggle('active');
        }

        // Notifications
        function toggleNotifications() {
            const dropdown = document.getElementById('notifications-dropdown');
            if (dropdown) dropdown.classList.toggle('active');
        }

        function clearAllNotifications() {
            fetch('/api/notifications/clear', { method: 'POST' }).catch(() => {});
            const list = document.querySelector('.notifications-list');
            if (list) list.innerHTML = '<div class="no-notifications">No notifications</div>';
            const badge = document.getElementById('notification-badge');
            if (badge) {
                badge.textContent = '0';
                badge.style.display = 'none';
            }
        }

        function markAllRead() {
            fetch('/api/notifications/read', { method: 'POST' }).catch(() => {});
            document.querySelectorAll('.notification-item.unread').forEach(item => {
                item.classList.remove('unread');
            });
            const badge = document.getElementById('notification-badge');
            if (badge) badge.style.display = 'none';
        }

        document.addEventListener('DOMContentLoaded', function() {
            initializeTheme();

            document.querySelectorAll('.theme-toggle').forEach(button => {
                button.addEventListener('click', toggleTheme);
            });

            // Mobile menu
            const menuToggle = document.getElementById('menu-toggle');
            const mobileMenu = document.getElementById('mobile-menu');
            if (menuToggle && mobileMenu) {
                menuToggle.addEventListener('click', () => {
                    menuToggle.classList.toggle('active');
                    mobileMenu.classList.toggle('active');
                });
                mobileMenu.querySelectorAll('a').forEach(link => {
                    link.addEventListener('click', () => {
                        menuToggle.classList.remove('active');
                        mobileMenu.classList.remove('active');
                    });
                });
            }

            // Profile avatar: left-click opens the profile, right-click
            // opens the dropdown instead of the browser menu.
            const avatar = document.getElementById('nav-avatar');
            const profileMenu = document.getElementById('profile-menu');
            if (avatar) {
                avatar.addEventListener('click', function(e) {
                    e.stopPropagation();
                    viewProfile();
                });
                avatar.addEventListener('contextmenu', function(e) {
                    e.preventDefault();
                    toggleProfileDropdown();
                });
            }

            // Notifications bell
            const bell = document.getElementById('notifications-btn');
            if (bell) {
                bell.addEventListener('click', function(e) {
                    e.stopPropagation();
                    toggleNotifications();
                });
            }
            const clearAllBtn = document.getElementById('clear-all-notifications');
            if (clearAllBtn) clearAllBtn.addEventListener('click', clearAllNotifications);
            const markReadBtn = document.getElementById('mark-all-read');
            if (markReadBtn) markReadBtn.addEventListener('click', markAllRead);

            // One document-wide listener dismisses open dropdowns when the
            // click lands outside both the control and its panel.
            document.addEventListener('click', function(e) {
                if (avatar && profileMenu && !avatar.contains(e.target) && !profileMenu.contains(e.target)) {
                    profileMenu.classList.remove('active');
                }
                const dropdown = document.getElementById('notifications-dropdown');
                if (dropdown && bell && !dropdown.contains(e.target) && !bell.contains(e.target)) {
                    dropdown.classList.remove('active');
                }
            });
        });

        window.viewProfile = viewProfile;
        window.editProfile = editProfile;
        window.logoutConfirm = logoutConfirm;
        window.showToast = showToast;
    })();
    </script>"##
}
