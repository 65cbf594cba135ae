// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Server-side session access.
//!
//! The session is a cookie-referenced entry in the server-side store
//! holding the signed-in identity plus the backend credential pair.
//! These helpers keep the key names and value shapes in one place.

use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::models::{SessionUser, TokenPair};

const USER_KEY: &str = "user";
const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Store identity and credentials after a successful sign-in.
pub async fn establish(session: &Session, user: &SessionUser, tokens: &TokenPair) -> Result<()> {
    session
        .insert(USER_KEY, user)
        .await
        .map_err(session_error)?;
    session
        .insert(ACCESS_TOKEN_KEY, &tokens.access_token)
        .await
        .map_err(session_error)?;
    session
        .insert(REFRESH_TOKEN_KEY, &tokens.refresh_token)
        .await
        .map_err(session_error)?;
    Ok(())
}

/// Read the signed-in identity, if any.
pub async fn current_user(session: &Session) -> Result<Option<SessionUser>> {
    session.get(USER_KEY).await.map_err(session_error)
}

/// Read the stored credential pair, if any.
///
/// A missing refresh token degrades to an empty string; the backend
/// treats that as "no refresh possible" rather than an error.
pub async fn tokens(session: &Session) -> Result<Option<TokenPair>> {
    let access_token: Option<String> = session.get(ACCESS_TOKEN_KEY).await.map_err(session_error)?;

    match access_token {
        Some(access_token) => {
            let refresh_token: String = session
                .get(REFRESH_TOKEN_KEY)
                .await
                .map_err(session_error)?
                .unwrap_or_default();
            Ok(Some(TokenPair {
                access_token,
                refresh_token,
            }))
        }
        None => Ok(None),
    }
}

/// Drop the session entirely, store entry included.
pub async fn clear(session: &Session) -> Result<()> {
    session.flush().await.map_err(session_error)
}

fn session_error(err: tower_sessions::session::Error) -> AppError {
    AppError::Internal(anyhow::anyhow!("session store: {err}"))
}
