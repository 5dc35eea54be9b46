//! Landing page template.
//!
//! Renders both hero sections; which one is visible comes entirely from
//! the synced `ViewContext`.

use crate::views::ViewContext;

use super::components::{display_attr, html_escape};

pub fn render_home(ctx: &ViewContext) -> String {
    let guest_hero = if ctx.guest_hero.present() {
        format!(
            r#"<section class="hero" id="hero-guest"{display}>
                <h1>Find Your Campus Community</h1>
                <p>CampusConnect pairs students with mentors, study partners, and peer groups across campus. Sign up and start connecting today.</p>
                <a href="/auth#signup" class="cta-btn">Get Started</a>
            </section>"#,
            display = display_attr(ctx.guest_hero),
        )
    } else {
        String::new()
    };

    let user_hero = if ctx.user_hero.present() {
        format!(
            r#"<section class="hero" id="hero-user"{display}>
                <h1 id="welcome-text">{welcome}</h1>
                <p id="user-info">{info}</p>
                <a href="/hub" class="cta-btn">Open the Mentorship Hub</a>
            </section>"#,
            display = display_attr(ctx.user_hero),
            welcome = html_escape(ctx.welcome_text.as_deref().unwrap_or("")),
            info = html_escape(ctx.user_info.as_deref().unwrap_or("")),
        )
    } else {
        String::new()
    };

    format!(
        r#"{guest_hero}
        {user_hero}
        <section class="features">
            <div class="feature">
                <h3>Find a Mentor</h3>
                <p>Browse mentors by category and request a session that fits your schedule.</p>
            </div>
            <div class="feature">
                <h3>Grow Your Skills</h3>
                <p>Web development, data science, career prep and more, guided by peers who have been there.</p>
            </div>
            <div class="feature">
                <h3>Give Back</h3>
                <p>Become a mentor yourself and help the next cohort find its footing.</p>
            </div>
        </section>"#,
        guest_hero = guest_hero,
        user_hero = user_hero,
    )
}
