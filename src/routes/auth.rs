// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Signup, signin, logout, verification, and password-reset handlers.
//!
//! State machine: anonymous -> pending-verification (signup) ->
//! authenticated (signin) -> anonymous (logout). The session is only
//! populated on a successful sign-in and always flushed on logout.

use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use crate::error::Result;
use crate::models::SessionUser;
use crate::{session, views, AppState};

const RESET_CONFIRMATION: &str = "Password reset instructions have been sent to your email.";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/signup", get(signup_form).post(signup))
        .route("/signin", get(signin_form).post(signin))
        .route("/logout", get(logout))
        .route("/password-reset", get(password_reset_form).post(password_reset))
        .route("/verify-callback", get(verify_callback))
}

/// Credentials submitted by the signup and signin forms.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

async fn signup_form() -> Html<String> {
    Html(views::signup_page(None))
}

/// Create an account; the user must verify their email before signing in.
async fn signup(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CredentialsForm>,
) -> Response {
    match state.supabase.sign_up(form.email.trim(), &form.password).await {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "Account created, verification pending");
            Redirect::to("/verify").into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "Sign-up rejected");
            Html(views::signup_page(Some(err.user_message()))).into_response()
        }
    }
}

async fn signin_form() -> Html<String> {
    Html(views::signin_page(None))
}

/// Authenticate and populate the session with identity plus the
/// backend credential pair.
async fn signin(
    session: Session,
    State(state): State<Arc<AppState>>,
    Form(form): Form<CredentialsForm>,
) -> Response {
    let email = form.email.trim();
    match state.supabase.sign_in(email, &form.password).await {
        Ok(signed_in) => {
            let user = SessionUser {
                id: signed_in.user.id,
                email: signed_in
                    .user
                    .email
                    .clone()
                    .unwrap_or_else(|| email.to_string()),
            };
            if let Err(err) = session::establish(&session, &user, &signed_in.token_pair()).await {
                return err.into_response();
            }
            tracing::info!(user_id = %user.id, "Signed in");
            Redirect::to("/dashboard").into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "Sign-in rejected");
            Html(views::signin_page(Some(err.user_message()))).into_response()
        }
    }
}

/// Sign out with the backend, then drop the session regardless of the
/// outcome.
async fn logout(session: Session, State(state): State<Arc<AppState>>) -> Result<Redirect> {
    if let Ok(Some(tokens)) = session::tokens(&session).await {
        if let Err(err) = state.supabase.sign_out(&tokens).await {
            tracing::warn!(error = %err, "Backend sign-out failed, clearing session anyway");
        }
    }
    session::clear(&session).await?;
    Ok(Redirect::to("/"))
}

async fn password_reset_form() -> Html<String> {
    Html(views::password_reset_page(None, None))
}

/// Email field of the password-reset form.
#[derive(Debug, Deserialize)]
pub struct ResetForm {
    #[serde(default)]
    pub email: String,
}

/// Trigger a recovery email. The confirmation text is fixed either way
/// the backend describes the account, so addresses cannot be probed
/// through error detail.
async fn password_reset(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ResetForm>,
) -> Response {
    match state.supabase.reset_password_email(form.email.trim()).await {
        Ok(()) => Html(views::password_reset_page(Some(RESET_CONFIRMATION), None)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "Password reset rejected");
            Html(views::password_reset_page(None, Some(err.user_message()))).into_response()
        }
    }
}

/// Query parameters of the email-verification callback.
#[derive(Debug, Deserialize)]
pub struct VerifyCallbackParams {
    #[serde(default)]
    token: String,
    #[serde(default, rename = "type")]
    kind: String,
}

/// Email-verification callback. Unknown types fall through to the home
/// page; the token itself is forwarded unvalidated, the backend owns it.
async fn verify_callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VerifyCallbackParams>,
) -> Result<Redirect> {
    if params.kind != "signup" {
        return Ok(Redirect::to("/"));
    }

    state.supabase.verify_signup(&params.token).await?;
    tracing::info!("Signup verification completed");
    Ok(Redirect::to("/signin"))
}
