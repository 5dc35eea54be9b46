//! Sign-in / sign-up page template.
//!
//! Both forms live on one page behind `#signin` / `#signup` anchors, the
//! targets the rest of the site links to.

use super::components::html_escape;

pub fn render_auth(error: Option<&str>, prefill_email: &str) -> String {
    let error_html = match error {
        Some(msg) => format!(r#"<div class="auth-error">{}</div>"#, html_escape(msg)),
        None => String::new(),
    };

    format!(
        r##"<div class="auth-card" id="signin">
            <h2>Sign In</h2>
            {error}
            <form method="post" action="/auth/signin">
                <div class="form-group">
                    <label for="signin-email">Email</label>
                    <input type="email" id="signin-email" name="email" value="{email}" required>
                </div>
                <button type="submit" class="btn-primary">Sign In</button>
            </form>
            <p class="auth-switch">New here? <a href="#signup">Create an account</a></p>
        </div>

        <div class="auth-card" id="signup">
            <h2>Sign Up</h2>
            <form method="post" action="/auth/signup">
                <div class="form-group">
                    <label for="signup-name">Full Name</label>
                    <input type="text" id="signup-name" name="name" required>
                </div>
                <div class="form-group">
                    <label for="signup-email">Email</label>
                    <input type="email" id="signup-email" name="email" required>
                </div>
                <div class="form-group">
                    <label for="signup-role">Role</label>
                    <select id="signup-role" name="role">
                        <option value="">Select...</option>
                        <option value="student">Student</option>
                        <option value="mentor">Mentor</option>
                    </select>
                </div>
                <div class="form-group">
                    <label for="signup-year">Year</label>
                    <input type="text" id="signup-year" name="year" placeholder="e.g. 2nd Year">
                </div>
                <div class="form-group">
                    <label for="signup-stream">Stream</label>
                    <input type="text" id="signup-stream" name="stream" placeholder="e.g. Computer Science">
                </div>
                <div class="form-group">
                    <label for="signup-interests">Interests</label>
                    <input type="text" id="signup-interests" name="interests" placeholder="Comma-separated interests">
                </div>
                <button type="submit" class="btn-primary">Create Account</button>
            </form>
            <p class="auth-switch">Already have an account? <a href="#signin">Sign in</a></p>
        </div>"##,
        error = error_html,
        email = html_escape(prefill_email),
    )
}
