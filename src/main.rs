//! CampusConnect - a campus peer-networking site.
//!
//! This is the main entry point for the CampusConnect web server.
//! The application is organized into the following modules:
//!
//! - `models`: Data structures for users, people cards, and form payloads
//! - `store`: The key-value user store and its memory/sled backends
//! - `session`: Session resolution, logout, and profile editing
//! - `views`: Per-page view context and the synchronization pass
//! - `widget`: The navigation avatar widget and its dropdown
//! - `notifications`: The notification panel and badge
//! - `hub`: Mentorship hub roster and filtering
//! - `templates`: HTML/CSS/JS templates and rendering
//! - `handlers`: HTTP route handlers

use axum::{
    routing::{get, post},
    Router,
};
use std::env;
use std::sync::Arc;

use campus_connect::{handlers, AppState, DB_PATH, DEFAULT_PORT};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    let state = Arc::new(AppState::new());

    let app = Router::new()
        // Pages
        .route("/", get(handlers::home))
        .route("/hub", get(handlers::hub_page))
        .route("/profile", get(handlers::profile_page))
        .route("/auth", get(handlers::auth_page))
        // Session actions
        .route("/auth/signin", post(handlers::signin))
        .route("/auth/signup", post(handlers::signup))
        .route("/logout", post(handlers::logout))
        .route("/profile/edit", post(handlers::save_profile))
        // API routes
        .route("/api/requests", post(handlers::request_session))
        .route("/api/notifications/clear", post(handlers::clear_notifications))
        .route("/api/notifications/read", post(handlers::mark_notifications_read))
        // Unknown paths fall back to the landing page
        .fallback(handlers::fallback)
        .with_state(state);

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .expect("Failed to bind to port");

    println!("CampusConnect server running at http://127.0.0.1:{}", port);
    println!("User store: {}", DB_PATH);

    axum::serve(listener, app).await.expect("Server error");
}
