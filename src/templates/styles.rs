//! CSS styles for the CampusConnect pages.
//!
//! Contains the main STYLE constant with all CSS for the web interface.
//! Light and dark themes share one set of variables; the theme toggle
//! flips the `data-theme` attribute on the document element.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
:root {
    --bg: #f8fafc;
    --surface: #ffffff;
    --fg: #1e293b;
    --muted: #64748b;
    --border: #e2e8f0;
    --brand: #6366f1;
    --brand-dark: #4f46e5;
    --accent: #10b981;
    --accent-dark: #059669;
    --danger: #ef4444;
    --shadow: rgba(15, 23, 42, 0.08);
}

[data-theme="dark"] {
    --bg: #0f172a;
    --surface: #1e293b;
    --fg: #e2e8f0;
    --muted: #94a3b8;
    --border: #334155;
    --shadow: rgba(0, 0, 0, 0.4);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}

.container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 1.5rem 1rem;
}

a { color: var(--brand); text-decoration: none; }
a:hover { color: var(--brand-dark); }

h1, h2, h3 { font-weight: 700; }

/* Navigation */

.nav {
    position: sticky;
    top: 0;
    background: var(--surface);
    border-bottom: 1px solid var(--border);
    padding: 0.75rem 1.25rem;
    display: flex;
    gap: 1.25rem;
    align-items: center;
    z-index: 100;
}

.nav-brand {
    font-weight: 800;
    font-size: 1.1rem;
    background: linear-gradient(135deg, var(--brand), var(--accent));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.nav-links { display: flex; gap: 1.25rem; }
.nav-links a { color: var(--fg); font-size: 0.95rem; }
.nav-links a:hover { color: var(--brand); }
.nav .spacer { flex: 1; }

.nav-right {
    display: flex;
    gap: 0.75rem;
    align-items: center;
    position: relative;
}

.nav-avatar {
    width: 36px;
    height: 36px;
    border-radius: 50%;
    background: linear-gradient(135deg, var(--brand), var(--brand-dark));
    color: #fff;
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
    cursor: pointer;
    user-select: none;
}

.theme-toggle {
    background: none;
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 0.3rem 0.5rem;
    cursor: pointer;
    font-size: 1rem;
}

/* Dropdowns */

.profile-menu, .notifications-dropdown {
    display: none;
    position: absolute;
    top: calc(100% + 10px);
    right: 0;
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 12px;
    box-shadow: 0 10px 30px var(--shadow);
    min-width: 220px;
    z-index: 200;
}

.profile-menu.active, .notifications-dropdown.active { display: block; }

.profile-menu button {
    display: block;
    width: 100%;
    text-align: left;
    padding: 0.6rem 1rem;
    background: none;
    border: none;
    color: var(--fg);
    font-size: 0.9rem;
    cursor: pointer;
}
.profile-menu button:hover { background: var(--bg); }

.notifications-wrapper { position: relative; }

.notifications-btn {
    background: none;
    border: none;
    font-size: 1.1rem;
    cursor: pointer;
    position: relative;
    color: var(--fg);
}

.notification-badge {
    position: absolute;
    top: -6px;
    right: -8px;
    background: var(--danger);
    color: #fff;
    border-radius: 999px;
    font-size: 0.65rem;
    min-width: 16px;
    height: 16px;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 0 4px;
}

.notifications-dropdown { width: 320px; }

.notifications-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 0.75rem 1rem;
    border-bottom: 1px solid var(--border);
    font-weight: 600;
}

.notifications-header button {
    background: none;
    border: none;
    color: var(--brand);
    font-size: 0.8rem;
    cursor: pointer;
}

.notifications-list { max-height: 320px; overflow-y: auto; }

.notification-item {
    padding: 0.75rem 1rem;
    border-bottom: 1px solid var(--border);
}
.notification-item:last-child { border-bottom: none; }
.notification-item.unread { background: rgba(99, 102, 241, 0.07); }
.notification-title { font-weight: 600; font-size: 0.9rem; }
.notification-body { font-size: 0.85rem; color: var(--muted); }
.notification-time { font-size: 0.75rem; color: var(--muted); }

.no-notifications {
    padding: 1.5rem;
    text-align: center;
    color: var(--muted);
    font-size: 0.9rem;
}

/* Mobile menu */

.menu-toggle {
    display: none;
    background: none;
    border: none;
    font-size: 1.3rem;
    cursor: pointer;
    color: var(--fg);
}

.mobile-menu {
    display: none;
    position: fixed;
    top: 56px;
    left: 0;
    right: 0;
    background: var(--surface);
    border-bottom: 1px solid var(--border);
    padding: 1rem 1.25rem;
    z-index: 150;
}
.mobile-menu.active { display: block; }
.mobile-menu a, .mobile-menu button {
    display: block;
    padding: 0.5rem 0;
    color: var(--fg);
    background: none;
    border: none;
    font-size: 1rem;
    cursor: pointer;
    text-align: left;
    width: 100%;
}

/* Hero sections */

.hero {
    text-align: center;
    padding: 4rem 1rem 3rem;
}
.hero h1 { font-size: 2.2rem; margin-bottom: 0.75rem; }
.hero p { color: var(--muted); max-width: 560px; margin: 0 auto 1.5rem; }

.cta-btn {
    display: inline-block;
    background: linear-gradient(135deg, var(--brand), var(--brand-dark));
    color: #fff;
    padding: 0.7rem 1.6rem;
    border-radius: 10px;
    font-weight: 600;
}
.cta-btn:hover { color: #fff; opacity: 0.92; }

/* Feature cards */

.features {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1.25rem;
    padding: 1rem 0 3rem;
}

.feature {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 14px;
    padding: 1.5rem;
}
.feature h3 { margin-bottom: 0.4rem; font-size: 1.05rem; }
.feature p { color: var(--muted); font-size: 0.9rem; }

/* Hub */

.role-tabs { display: flex; gap: 0.5rem; margin-bottom: 1rem; }

.role-tab {
    padding: 0.5rem 1.2rem;
    border-radius: 999px;
    border: 1px solid var(--border);
    color: var(--fg);
    font-size: 0.9rem;
}
.role-tab.active {
    background: var(--brand);
    border-color: var(--brand);
    color: #fff;
}
.role-tab.active:hover { color: #fff; }

.filter-bar { margin-bottom: 1.5rem; }

.filter-bar select {
    padding: 0.5rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 8px;
    background: var(--surface);
    color: var(--fg);
    font-size: 0.9rem;
}

.people-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 1.25rem;
}

.person-card {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 14px;
    padding: 1.25rem;
}

.card-avatar {
    width: 48px;
    height: 48px;
    border-radius: 50%;
    background: linear-gradient(135deg, var(--brand), var(--accent));
    color: #fff;
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: 700;
    margin-bottom: 0.75rem;
}

.person-card h3 { font-size: 1rem; }
.person-card .card-meta { color: var(--muted); font-size: 0.8rem; margin-bottom: 0.5rem; }
.person-card .headline { font-size: 0.88rem; margin-bottom: 0.75rem; }

.skill-tag {
    display: inline-block;
    background: var(--bg);
    border: 1px solid var(--border);
    border-radius: 999px;
    padding: 0.15rem 0.6rem;
    font-size: 0.75rem;
    margin: 0 0.25rem 0.3rem 0;
    color: var(--muted);
}

.request-btn {
    margin-top: 0.5rem;
    width: 100%;
    padding: 0.5rem;
    border: none;
    border-radius: 8px;
    background: var(--brand);
    color: #fff;
    font-weight: 600;
    cursor: pointer;
}
.request-btn:hover { background: var(--brand-dark); }

.empty-roster {
    color: var(--muted);
    padding: 2rem;
    text-align: center;
    grid-column: 1 / -1;
}

/* Modals */

.modal-overlay {
    display: none;
    position: fixed;
    inset: 0;
    background: rgba(15, 23, 42, 0.55);
    align-items: center;
    justify-content: center;
    z-index: 300;
}

.modal {
    background: var(--surface);
    border-radius: 14px;
    width: min(480px, 92vw);
    max-height: 88vh;
    overflow-y: auto;
}

.modal-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem 1.25rem;
    border-bottom: 1px solid var(--border);
}

.close-btn {
    background: none;
    border: none;
    font-size: 1.3rem;
    cursor: pointer;
    color: var(--muted);
}

.modal-body { padding: 1.25rem; }

.modal-person {
    display: flex;
    gap: 0.75rem;
    align-items: center;
    margin-bottom: 1rem;
}
.modal-person .card-avatar { margin-bottom: 0; }
.modal-person .role-line { color: var(--muted); font-size: 0.85rem; }

.form-group { margin-bottom: 0.9rem; }
.form-group label { display: block; font-size: 0.85rem; font-weight: 600; margin-bottom: 0.3rem; }

.form-group input, .form-group select, .form-group textarea {
    width: 100%;
    padding: 0.55rem 0.7rem;
    border: 1px solid var(--border);
    border-radius: 8px;
    background: var(--bg);
    color: var(--fg);
    font-size: 0.9rem;
    font-family: inherit;
}

.form-actions { display: flex; gap: 0.6rem; justify-content: flex-end; margin-top: 1rem; }

.btn-primary, .btn-secondary {
    padding: 0.55rem 1.2rem;
    border-radius: 8px;
    border: none;
    font-weight: 600;
    cursor: pointer;
    font-size: 0.9rem;
}
.btn-primary { background: var(--brand); color: #fff; }
.btn-primary:hover { background: var(--brand-dark); }
.btn-secondary { background: var(--bg); color: var(--fg); border: 1px solid var(--border); }

/* Profile */

.profile-card {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 14px;
    padding: 2rem;
    max-width: 560px;
    margin: 1rem auto;
    text-align: center;
}

.profile-avatar {
    width: 84px;
    height: 84px;
    border-radius: 50%;
    background: linear-gradient(135deg, var(--brand), var(--accent));
    color: #fff;
    font-size: 2rem;
    font-weight: 700;
    display: flex;
    align-items: center;
    justify-content: center;
    margin: 0 auto 1rem;
}

.meta-rows { text-align: left; margin: 1.25rem 0; }
.meta-row {
    display: flex;
    justify-content: space-between;
    padding: 0.5rem 0;
    border-bottom: 1px solid var(--border);
    font-size: 0.9rem;
}
.meta-row .meta-label { color: var(--muted); }

/* Auth */

.auth-card {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 14px;
    padding: 2rem;
    max-width: 420px;
    margin: 2rem auto;
}
.auth-card h2 { margin-bottom: 1rem; }
.auth-card + .auth-card { margin-top: 1.5rem; }

.auth-error {
    background: rgba(239, 68, 68, 0.1);
    border: 1px solid var(--danger);
    color: var(--danger);
    border-radius: 8px;
    padding: 0.6rem 0.9rem;
    font-size: 0.85rem;
    margin-bottom: 1rem;
}

.auth-switch { font-size: 0.85rem; color: var(--muted); margin-top: 1rem; }

/* Toast */

.toast {
    position: fixed;
    top: 20px;
    right: 20px;
    background: linear-gradient(135deg, var(--accent), var(--accent-dark));
    color: #fff;
    padding: 14px 22px;
    border-radius: 12px;
    box-shadow: 0 10px 30px rgba(16, 185, 129, 0.3);
    z-index: 9999;
    transform: translateX(120%);
    transition: transform 0.5s cubic-bezier(0.4, 0, 0.2, 1);
    display: flex;
    align-items: center;
    gap: 8px;
    font-weight: 500;
}
.toast.visible { transform: translateX(0); }

@media (max-width: 720px) {
    .nav-links { display: none; }
    .menu-toggle { display: block; }
    .hero h1 { font-size: 1.7rem; }
}
"#;
