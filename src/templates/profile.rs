//! Profile page template.
//!
//! The edit modal ships prefilled from the server so opening it never
//! needs another round trip. Field values come from an `EditForm`, which
//! already defaults absent record fields to empty strings.

use crate::hub::initials;
use crate::models::UserRecord;
use crate::session::EditForm;

use super::components::html_escape;

pub fn render_profile(session: Option<&UserRecord>, form: &EditForm, saved: bool) -> String {
    let card = match session {
        Some(user) => profile_card(user),
        None => guest_card(),
    };

    let toast = if saved {
        r#"<script>document.addEventListener('DOMContentLoaded', function() {
            window.showToast('Profile updated successfully!');
        });</script>"#
    } else {
        ""
    };

    format!(
        "{card}\n{modal}\n{toast}",
        card = card,
        modal = edit_modal(form),
        toast = toast,
    )
}

fn profile_card(user: &UserRecord) -> String {
    fn meta_row(label: &str, value: &str) -> String {
        let shown = if value.is_empty() { "Not set" } else { value };
        format!(
            r#"<div class="meta-row"><span class="meta-label">{}</span><span>{}</span></div>"#,
            label,
            html_escape(shown)
        )
    }

    let mut rows = String::from(r#"<div class="meta-rows">"#);
    rows.push_str(&meta_row("Email", &user.email));
    rows.push_str(&meta_row("Role", user.role.as_deref().unwrap_or("")));
    rows.push_str(&meta_row("Year", user.year.as_deref().unwrap_or("")));
    rows.push_str(&meta_row("Stream", user.stream.as_deref().unwrap_or("")));
    rows.push_str(&meta_row("Interests", &user.interests_joined()));
    rows.push_str("</div>");

    format!(
        r#"<div class="profile-card">
            <div class="profile-avatar">{initials}</div>
            <h1>{name}</h1>
            {rows}
            <button class="btn-primary" onclick="editProfile()">Edit Profile</button>
        </div>"#,
        initials = html_escape(&initials(&user.name)),
        name = html_escape(&user.name),
        rows = rows,
    )
}

fn guest_card() -> String {
    r#"<div class="profile-card">
        <h1>Your Profile</h1>
        <p style="color: var(--muted); margin: 1rem 0">Sign in to view and edit your profile.</p>
        <a href="/auth#signin" class="cta-btn">Sign In</a>
    </div>"#
        .to_string()
}

fn edit_modal(form: &EditForm) -> String {
    format!(
        r#"<div class="modal-overlay" id="edit-modal">
            <div class="modal">
                <div class="modal-header">
                    <h3>Edit Profile</h3>
                    <button class="close-btn" onclick="closeEditModal()">&times;</button>
                </div>
                <div class="modal-body">
                    <form method="post" action="/profile/edit">
                        <div class="form-group">
                            <label for="edit-name">Full Name</label>
                            <input type="text" id="edit-name" name="name" value="{name}" required>
                        </div>
                        <div class="form-group">
                            <label for="edit-role">Role</label>
                            <input type="text" id="edit-role" name="role" value="{role}" placeholder="mentor or student">
                        </div>
                        <div class="form-group">
                            <label for="edit-year">Year</label>
                            <input type="text" id="edit-year" name="year" value="{year}" placeholder="e.g. 2nd Year">
                        </div>
                        <div class="form-group">
                            <label for="edit-stream">Stream</label>
                            <input type="text" id="edit-stream" name="stream" value="{stream}" placeholder="e.g. Computer Science">
                        </div>
                        <div class="form-group">
                            <label for="edit-interests">Interests</label>
                            <input type="text" id="edit-interests" name="interests" value="{interests}" placeholder="Comma-separated interests">
                        </div>
                        <div class="form-actions">
                            <button type="button" class="btn-secondary" onclick="closeEditModal()">Cancel</button>
                            <button type="submit" class="btn-primary">Save Changes</button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
        <script>
        function closeEditModal() {{
            const modal = document.getElementById('edit-modal');
            if (modal) modal.style.display = 'none';
        }}
        document.addEventListener('click', function(e) {{
            const modal = document.getElementById('edit-modal');
            if (modal && e.target === modal) closeEditModal();
        }});
        </script>"#,
        name = html_escape(&form.name),
        role = html_escape(&form.role),
        year = html_escape(&form.year),
        stream = html_escape(&form.stream),
        interests = html_escape(&form.interests),
    )
}
