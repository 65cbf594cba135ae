// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public pages and the signed-in dashboard.

use axum::{
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Extension, Router,
};
use std::sync::Arc;
use tower_sessions::Session;

use crate::error::Result;
use crate::middleware::AuthSession;
use crate::{session, views, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/verify", get(verify_notice))
}

pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(dashboard))
}

/// Landing page; signed-in visitors go straight to the dashboard.
async fn home(session: Session) -> Result<Response> {
    if session::current_user(&session).await?.is_some() {
        return Ok(Redirect::to("/dashboard").into_response());
    }
    Ok(Html(views::home_page()).into_response())
}

/// Static notice shown after signup while verification is outstanding.
async fn verify_notice() -> Html<String> {
    Html(views::verify_page())
}

/// Greet the signed-in user.
async fn dashboard(Extension(auth): Extension<AuthSession>) -> Html<String> {
    Html(views::dashboard_page(&auth.user.email))
}
