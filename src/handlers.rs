//! HTTP route handlers for the CampusConnect site.
//!
//! Every page handler runs the same pass: resolve the session from the
//! store, build the page's view context, synchronize it, then render.
//! State-changing actions mutate the store and redirect, so the next page
//! load re-derives everything from storage alone.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::hub;
use crate::models::{
    LogoutForm, ProfileForm, RequestAck, Role, SessionRequest, SignInForm, SignUpForm, UserRecord,
};
use crate::session::{self, EditOutcome, NavTarget};
use crate::store::{self, StoreError};
use crate::templates::{base_html, nav_html, render_auth, render_home, render_hub, render_profile};
use crate::views::{sync_views, ViewContext};
use crate::widget::AvatarManager;
use crate::AppState;

fn store_error(e: StoreError) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
}

/// One synchronization pass for the page being served.
fn synced(state: &AppState, mut ctx: ViewContext) -> (Option<UserRecord>, ViewContext, AvatarManager) {
    let session = {
        let store = state.store();
        session::resolve_session(store.as_ref())
    };
    let mut avatar = AvatarManager::new();
    sync_views(session.as_ref(), &mut ctx, &mut avatar);
    (session, ctx, avatar)
}

fn page(state: &AppState, title: &str, ctx: &ViewContext, avatar: &AvatarManager, content: &str) -> Html<String> {
    let panel = state.notifications().clone();
    let nav = nav_html(ctx, avatar, &panel);
    Html(base_html(title, &nav, content))
}

// ============================================================================
// Page Handlers
// ============================================================================

pub async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    let (_, ctx, avatar) = synced(&state, ViewContext::home());
    page(&state, "CampusConnect", &ctx, &avatar, &render_home(&ctx))
}

#[derive(Deserialize)]
pub struct HubQuery {
    pub tab: Option<String>,
    pub category: Option<String>,
}

pub async fn hub_page(
    Query(query): Query<HubQuery>,
    State(state): State<Arc<AppState>>,
) -> Html<String> {
    let (_, ctx, avatar) = synced(&state, ViewContext::standard());

    let role = query
        .tab
        .as_deref()
        .and_then(Role::from_tab)
        .unwrap_or(Role::Mentor);
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    let cards = hub::filter_cards(&state.roster, role, category);
    let cats = hub::categories(&state.roster);

    page(
        &state,
        "Mentorship Hub",
        &ctx,
        &avatar,
        &render_hub(&cards, role, category, &cats),
    )
}

#[derive(Deserialize)]
pub struct ProfileQuery {
    pub saved: Option<bool>,
}

pub async fn profile_page(
    Query(query): Query<ProfileQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let (session, ctx, avatar) = synced(&state, ViewContext::with_edit_modal());

    let form = match session::edit_profile(session.as_ref(), ctx.has_edit_modal) {
        EditOutcome::Opened(form) => form,
        EditOutcome::Redirect(target) => return Redirect::to(target.href()).into_response(),
    };

    let content = render_profile(session.as_ref(), &form, query.saved.unwrap_or(false));
    page(&state, "Your Profile", &ctx, &avatar, &content).into_response()
}

/// Sign-in / sign-up page. Signed-in visitors have nothing to do here and
/// go back to the landing page.
pub async fn auth_page(State(state): State<Arc<AppState>>) -> Response {
    let (session, ctx, avatar) = synced(&state, ViewContext::standard());
    if session.is_some() {
        return Redirect::to("/").into_response();
    }
    page(&state, "Sign In", &ctx, &avatar, &render_auth(None, "")).into_response()
}

/// Unknown paths get the landing page, matching how the site treats every
/// stray URL as a fresh visit.
pub async fn fallback(State(state): State<Arc<AppState>>) -> Html<String> {
    home(State(state)).await
}

fn auth_error_page(state: &AppState, message: &str, email: &str) -> Response {
    let (_, ctx, avatar) = synced(state, ViewContext::standard());
    page(state, "Sign In", &ctx, &avatar, &render_auth(Some(message), email)).into_response()
}

// ============================================================================
// Sign-in / Sign-up Handlers
// ============================================================================

pub async fn signin(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SignInForm>,
) -> Response {
    let email = form.email.trim().to_string();

    {
        let mut store = state.store();
        if store::find_user(store.as_ref(), &email).is_none() {
            drop(store);
            return auth_error_page(
                &state,
                "No account found for that email. Sign up below.",
                &email,
            );
        }
        if let Err(e) = store::set_current_email(store.as_mut(), &email) {
            return store_error(e);
        }
    }

    Redirect::to("/").into_response()
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SignUpForm>,
) -> Response {
    let email = form.email.trim().to_string();
    let name = form.name.trim().to_string();
    if email.is_empty() || name.is_empty() {
        return auth_error_page(&state, "Name and email are both required.", &email);
    }

    {
        let mut store = state.store();
        if store::find_user(store.as_ref(), &email).is_some() {
            drop(store);
            return auth_error_page(
                &state,
                "An account with that email already exists. Sign in instead.",
                &email,
            );
        }

        if let Err(e) = store::upsert_user(store.as_mut(), UserRecord::new(&email, &name)) {
            return store_error(e);
        }
        // Route the optional fields through the same normalization the
        // edit form uses.
        let profile = ProfileForm {
            name,
            role: form.role,
            year: form.year,
            stream: form.stream,
            interests: form.interests,
        };
        if let Err(e) = session::save_profile(store.as_mut(), &email, &profile) {
            return store_error(e);
        }
        if let Err(e) = store::set_current_email(store.as_mut(), &email) {
            return store_error(e);
        }
    }

    Redirect::to("/").into_response()
}

// ============================================================================
// Logout Handler
// ============================================================================

/// The confirmation dialog runs in the browser; the posted flag replays
/// its outcome into the logout action. A declined dialog normally never
/// submits, but a false flag still leaves the store untouched.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LogoutForm>,
) -> Response {
    let confirmed = form.confirmed;
    let mut store = state.store();

    match session::logout(store.as_mut(), |_prompt| confirmed) {
        Ok(Some(target)) => Redirect::to(target.href()).into_response(),
        Ok(None) => Redirect::to("/").into_response(),
        Err(e) => store_error(e),
    }
}

// ============================================================================
// Profile Edit Handler
// ============================================================================

/// Gates on the resolved session, not the raw pointer, so a pointer to a
/// deleted record gets the sign-in redirect instead of a hollow success.
pub async fn save_profile(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ProfileForm>,
) -> Response {
    let mut store = state.store();
    let user = match session::resolve_session(store.as_ref()) {
        Some(user) => user,
        None => return Redirect::to(NavTarget::SignIn.href()).into_response(),
    };

    if let Err(e) = session::save_profile(store.as_mut(), &user.email, &form) {
        return store_error(e);
    }

    Redirect::to("/profile?saved=true").into_response()
}

// ============================================================================
// API Handlers
// ============================================================================

pub async fn request_session(Json(request): Json<SessionRequest>) -> Json<RequestAck> {
    Json(RequestAck {
        success: true,
        message: hub::request_confirmation(&request.to),
    })
}

pub async fn clear_notifications(State(state): State<Arc<AppState>>) -> StatusCode {
    state.notifications().clear_all();
    StatusCode::NO_CONTENT
}

pub async fn mark_notifications_read(State(state): State<Arc<AppState>>) -> StatusCode {
    state.notifications().mark_all_read();
    StatusCode::NO_CONTENT
}
