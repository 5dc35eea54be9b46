//! Mentorship hub page template.
//!
//! Role tabs and the category dropdown are server-driven: each change
//! navigates with query parameters and the handler filters the roster.
//! The request modal is filled client-side from the card that opened it.

use crate::models::{PersonCard, Role};

use super::components::html_escape;

pub fn render_hub(
    cards: &[&PersonCard],
    role: Role,
    category: Option<&str>,
    categories: &[String],
) -> String {
    let tabs = role_tabs(role, category);
    let filter = category_filter(role, category, categories);

    let mut grid = String::from(r#"<div class="people-grid">"#);
    if cards.is_empty() {
        grid.push_str(&format!(
            r#"<p class="empty-roster">No {} match that category yet.</p>"#,
            role.tab()
        ));
    } else {
        for card in cards {
            grid.push_str(&person_card_html(card));
        }
    }
    grid.push_str("</div>");

    format!(
        r#"<h1>Mentorship Hub</h1>
        <p style="color: var(--muted); margin-bottom: 1.25rem">Find the right person to learn from, or someone to bring along.</p>
        {tabs}
        {filter}
        {grid}
        {modal}
        {script}"#,
        tabs = tabs,
        filter = filter,
        grid = grid,
        modal = request_modal(),
        script = hub_script(),
    )
}

fn hub_url(role: Role, category: Option<&str>) -> String {
    match category {
        Some(cat) => format!(
            "/hub?tab={}&category={}",
            role.tab(),
            urlencoding::encode(cat)
        ),
        None => format!("/hub?tab={}", role.tab()),
    }
}

fn role_tabs(selected: Role, category: Option<&str>) -> String {
    let mut html = String::from(r#"<div class="role-tabs">"#);
    for role in [Role::Mentor, Role::Student] {
        let class = if role == selected {
            "role-tab active"
        } else {
            "role-tab"
        };
        html.push_str(&format!(
            r#"<a class="{class}" href="{href}">{label}s</a>"#,
            class = class,
            href = hub_url(role, category),
            label = role.label(),
        ));
    }
    html.push_str("</div>");
    html
}

fn category_filter(role: Role, selected: Option<&str>, categories: &[String]) -> String {
    let mut options = String::from(r#"<option value="">All Categories</option>"#);
    for cat in categories {
        let marker = if selected == Some(cat.as_str()) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{value}"{marker}>{value}</option>"#,
            value = html_escape(cat),
            marker = marker,
        ));
    }

    format!(
        r#"<form class="filter-bar" method="get" action="/hub">
            <input type="hidden" name="tab" value="{tab}">
            <select name="category" id="category-filter" onchange="this.form.submit()">{options}</select>
        </form>"#,
        tab = role.tab(),
        options = options,
    )
}

fn person_card_html(card: &PersonCard) -> String {
    let mut skills = String::new();
    for skill in &card.skills {
        skills.push_str(&format!(
            r#"<span class="skill-tag">{}</span>"#,
            html_escape(skill)
        ));
    }

    format!(
        r#"<div class="person-card" data-name="{name}" data-role="{role}">
            <div class="card-avatar">{initials}</div>
            <h3>{name}</h3>
            <div class="card-meta">{role} &middot; {category} &middot; {year}</div>
            <p class="headline">{headline}</p>
            <div>{skills}</div>
            <button class="request-btn">Request Session</button>
        </div>"#,
        name = html_escape(&card.name),
        role = card.role.label(),
        initials = html_escape(&crate::hub::initials(&card.name)),
        category = html_escape(&card.category),
        year = html_escape(&card.year),
        headline = html_escape(&card.headline),
        skills = skills,
    )
}

fn request_modal() -> &'static str {
    r#"<div class="modal-overlay" id="request-modal">
        <div class="modal">
            <div class="modal-header">
                <h3>Request a Session</h3>
                <button class="close-btn" id="request-close">&times;</button>
            </div>
            <div class="modal-body">
                <div class="modal-person">
                    <div class="card-avatar" id="modal-avatar"></div>
                    <div>
                        <h3 id="modal-name"></h3>
                        <div class="role-line" id="modal-role"></div>
                    </div>
                </div>
                <form id="request-form">
                    <div class="form-group">
                        <label for="help-topic">What do you need help with?</label>
                        <input type="text" id="help-topic" required>
                    </div>
                    <div class="form-group">
                        <label for="challenge-description">Describe your current challenge</label>
                        <textarea id="challenge-description" rows="3"></textarea>
                    </div>
                    <div class="form-group">
                        <label for="experience-level">Your experience level</label>
                        <select id="experience-level">
                            <option value="">Select...</option>
                            <option>Beginner</option>
                            <option>Intermediate</option>
                            <option>Advanced</option>
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="session-format">Preferred session format</label>
                        <select id="session-format">
                            <option value="">Select...</option>
                            <option>In person</option>
                            <option>Video call</option>
                            <option>Chat</option>
                        </select>
                    </div>
                    <div class="form-actions">
                        <button type="button" class="btn-secondary" id="request-cancel">Cancel</button>
                        <button type="submit" class="btn-primary">Send Request</button>
                    </div>
                </form>
            </div>
        </div>
    </div>"#
}

fn hub_script() -> &'static str {
    r#"<script>
    (function() {
        const modal = document.getElementById('request-modal');
        const form = document.getElementById('request-form');

        function openRequestModal(name, role) {
            document.getElementById('modal-name').textContent = name;
            document.getElementById('modal-role').textContent = role;
            document.getElementById('modal-avatar').textContent =
                name.split(' ').map(n => n[0]).join('');
            modal.style.display = 'flex';
        }

        function closeRequestModal() {
            modal.style.display = 'none';
            form.reset();
        }

        document.querySelectorAll('.request-btn').forEach(btn => {
            btn.addEventListener('click', () => {
                const card = btn.closest('.person-card');
                openRequestModal(card.dataset.name, card.dataset.role);
            });
        });

        document.getElementById('request-close').addEventListener('click', closeRequestModal);
        document.getElementById('request-cancel').addEventListener('click', closeRequestModal);

        modal.addEventListener('click', (e) => {
            if (e.target === modal) closeRequestModal();
        });

        form.addEventListener('submit', async (e) => {
            e.preventDefault();
            const payload = {
                to: document.getElementById('modal-name').textContent,
                topic: document.getElementById('help-topic').value,
                challenge: document.getElementById('challenge-description').value,
                experience: document.getElementById('experience-level').value,
                format: document.getElementById('session-format').value
            };
            try {
                const response = await fetch('/api/requests', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify(payload)
                });
                const data = await response.json();
                window.showToast(data.message);
            } catch (err) {
                window.showToast('Request sent to ' + payload.to + '!');
            }
            closeRequestModal();
        });
    })();
    </script>"#
}
