// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! PostgREST operations on the `profiles` table.
//!
//! All operations run on a [`SessionClient`] so row-level security on the
//! backend sees the signed-in user's token, not the anon key.

use reqwest::Method;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Profile, ProfileDraft};

use super::{SessionClient, SupabaseClient};

/// Table name addressed through PostgREST.
pub const PROFILES: &str = "profiles";

impl SessionClient {
    /// Fetch the profile row owned by `user_id`, if any.
    pub async fn find_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        let url = format!(
            "{}?select=*&user_id=eq.{}",
            self.client.rest_url(PROFILES),
            urlencoding::encode(&user_id.to_string()),
        );
        let response = SupabaseClient::send(self.client.request(
            Method::GET,
            &url,
            Some(self.access_token()),
        ))
        .await?;
        let rows: Vec<Profile> = SupabaseClient::into_json(response).await?;
        Ok(rows.into_iter().next())
    }

    /// Insert-or-update the single row keyed by `user_id`.
    ///
    /// The uniqueness constraint lives in the database and the merge
    /// happens in one request, so concurrent submissions cannot create
    /// duplicate rows.
    pub async fn upsert_profile(&self, draft: &ProfileDraft) -> Result<Profile> {
        let url = format!("{}?on_conflict=user_id", self.client.rest_url(PROFILES));
        let response = SupabaseClient::send(
            self.client
                .request(Method::POST, &url, Some(self.access_token()))
                .header("Prefer", "resolution=merge-duplicates,return=representation")
                .json(draft),
        )
        .await?;
        let rows: Vec<Profile> = SupabaseClient::into_json(response).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AppError::Backend("upsert returned no row".to_string()))
    }

    /// Delete the row owned by `user_id`.
    ///
    /// Returns how many rows were removed; zero when no profile existed,
    /// which is a defined outcome rather than an error.
    pub async fn delete_profile(&self, user_id: Uuid) -> Result<usize> {
        let url = format!(
            "{}?user_id=eq.{}",
            self.client.rest_url(PROFILES),
            urlencoding::encode(&user_id.to_string()),
        );
        let response = SupabaseClient::send(
            self.client
                .request(Method::DELETE, &url, Some(self.access_token()))
                .header("Prefer", "return=representation"),
        )
        .await?;
        let rows: Vec<Profile> = SupabaseClient::into_json(response).await?;
        Ok(rows.len())
    }
}
