// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session-presence gate for protected routes.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{SessionUser, TokenPair};
use crate::session;

/// Identity and credentials resolved from the session, attached to the
/// request for downstream handlers.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: SessionUser,
    pub tokens: TokenPair,
}

/// Redirect anonymous requests to the signin page; otherwise attach
/// [`AuthSession`] and continue.
///
/// Only session presence is checked here. Handlers that talk to the
/// backend confirm the credential pair themselves, so the gate stays
/// free of network calls.
pub async fn require_auth(session: Session, mut request: Request, next: Next) -> Response {
    let user = match session::current_user(&session).await {
        Ok(Some(user)) => user,
        Ok(None) => return Redirect::to("/signin").into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to read session");
            return Redirect::to("/signin").into_response();
        }
    };

    let tokens = match session::tokens(&session).await {
        Ok(Some(tokens)) => tokens,
        // Identity without credentials means a broken session; force a
        // fresh sign-in rather than serving a half-working page.
        Ok(None) => {
            tracing::warn!(user_id = %user.id, "Session has identity but no tokens");
            return Redirect::to("/signin").into_response();
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to read session tokens");
            return Redirect::to("/signin").into_response();
        }
    };

    request.extensions_mut().insert(AuthSession { user, tokens });

    next.run(request).await
}
