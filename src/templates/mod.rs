//! HTML templates and styling for the CampusConnect pages.
//!
//! This module contains all CSS styles, JavaScript code, and HTML
//! generation functions for the web interface.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants and theme definitions
//! - `components` - Shared HTML components (navigation, notifications, base template)
//! - `home` - Landing page with guest and signed-in heroes
//! - `hub` - Mentorship hub roster and request modal
//! - `profile` - Profile page with the edit modal
//! - `auth` - Sign-in / sign-up page

mod auth;
mod components;
mod home;
mod hub;
mod profile;
mod styles;

pub use auth::render_auth;
pub use components::{base_html, display_attr, html_escape, nav_html};
pub use home::render_home;
pub use hub::render_hub;
pub use profile::render_profile;
pub use styles::STYLE;
