// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile view, upsert, and deletion.

use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_sessions::Session;

use crate::error::Result;
use crate::middleware::AuthSession;
use crate::models::{ProfileDraft, ProfileForm};
use crate::{session, views, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/profile",
            get(view_profile).post(save_profile).delete(delete_profile),
        )
        .route("/delete_profile", post(delete_profile_form))
}

/// Render the profile form, pre-filled from the stored row when present.
async fn view_profile(
    session: Session,
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthSession>,
) -> Result<Response> {
    let backend = state.supabase.with_session(&auth.tokens);

    // Confirm the credential pair before touching the table; a stale
    // pair sends the user back through signin instead of serving a
    // half-working page.
    if let Err(err) = backend.current_user().await {
        tracing::warn!(user_id = %auth.user.id, error = %err, "Stored credentials rejected");
        session::clear(&session).await?;
        return Ok(Redirect::to("/signin").into_response());
    }

    let form = match backend.find_profile(auth.user.id).await? {
        Some(profile) => ProfileForm::from(&profile),
        None => ProfileForm::default(),
    };

    Ok(Html(views::profile_page(&form)).into_response())
}

/// Persist the submitted profile in one atomic upsert keyed on the user.
async fn save_profile(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthSession>,
    Form(form): Form<ProfileForm>,
) -> Result<Redirect> {
    let backend = state.supabase.with_session(&auth.tokens);
    let draft = ProfileDraft::from_form(auth.user.id, form);

    let saved = backend.upsert_profile(&draft).await?;
    tracing::info!(user_id = %auth.user.id, profile_id = saved.id, "Profile saved");

    Ok(Redirect::to("/profile"))
}

/// Response for profile deletion over the DELETE verb.
#[derive(Serialize)]
pub struct DeleteProfileResponse {
    pub success: bool,
    pub deleted: usize,
}

/// Delete the profile row. A missing row is a defined success with zero
/// deletions, not an error.
async fn delete_profile(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthSession>,
) -> Json<DeleteProfileResponse> {
    let backend = state.supabase.with_session(&auth.tokens);

    match backend.delete_profile(auth.user.id).await {
        Ok(deleted) => {
            tracing::info!(user_id = %auth.user.id, deleted, "Profile deleted");
            Json(DeleteProfileResponse {
                success: true,
                deleted,
            })
        }
        Err(err) => {
            tracing::error!(user_id = %auth.user.id, error = %err, "Profile deletion failed");
            Json(DeleteProfileResponse {
                success: false,
                deleted: 0,
            })
        }
    }
}

/// Form-post variant of deletion; redirects back to the profile page.
async fn delete_profile_form(
    State(state): State<Arc<AppState>>,
    Extension(auth): Extension<AuthSession>,
) -> Result<Redirect> {
    let backend = state.supabase.with_session(&auth.tokens);

    let deleted = backend.delete_profile(auth.user.id).await?;
    tracing::info!(user_id = %auth.user.id, deleted, "Profile deleted via form");

    Ok(Redirect::to("/profile"))
}
