// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GoTrue auth capabilities: sign-up, sign-in, sign-out, verification,
//! and password recovery.

use reqwest::Method;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::Result;
use crate::models::TokenPair;

use super::{SessionClient, SupabaseClient};

/// Auth user record as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: Option<String>,
    /// Set once the verification email has been confirmed
    #[serde(default)]
    pub email_confirmed_at: Option<String>,
    /// Set when a verification email is outstanding
    #[serde(default)]
    pub confirmation_sent_at: Option<String>,
}

/// Successful password-grant response.
#[derive(Debug, Clone, Deserialize)]
pub struct SignInResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    pub user: AuthUser,
}

impl SignInResponse {
    /// The opaque credential pair to store in the session.
    pub fn token_pair(&self) -> TokenPair {
        TokenPair {
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }
}

impl SupabaseClient {
    /// Create a new account.
    ///
    /// The account is unusable until the verification email is confirmed;
    /// the response carries the pending user record, no tokens.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response = Self::send(
            self.request(Method::POST, &self.auth_url("signup"), None)
                .json(&body),
        )
        .await?;
        Self::into_json(response).await
    }

    /// Exchange credentials for a token pair (password grant).
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse> {
        let url = format!("{}?grant_type=password", self.auth_url("token"));
        let body = serde_json::json!({ "email": email, "password": password });
        let response = Self::send(self.request(Method::POST, &url, None).json(&body)).await?;
        Self::into_json(response).await
    }

    /// Revoke the backend session behind a credential pair.
    pub async fn sign_out(&self, tokens: &TokenPair) -> Result<()> {
        let response = Self::send(self.request(
            Method::POST,
            &self.auth_url("logout"),
            Some(&tokens.access_token),
        ))
        .await?;
        Self::into_unit(response).await
    }

    /// Fetch the user a credential pair belongs to.
    pub async fn current_user(&self, tokens: &TokenPair) -> Result<AuthUser> {
        let response = Self::send(self.request(
            Method::GET,
            &self.auth_url("user"),
            Some(&tokens.access_token),
        ))
        .await?;
        Self::into_json(response).await
    }

    /// Trigger a password-recovery email.
    pub async fn reset_password_email(&self, email: &str) -> Result<()> {
        let body = serde_json::json!({ "email": email });
        let response = Self::send(
            self.request(Method::POST, &self.auth_url("recover"), None)
                .json(&body),
        )
        .await?;
        Self::into_unit(response).await
    }

    /// Complete email verification for a signup token.
    ///
    /// The token is forwarded as received; the backend owns validation.
    pub async fn verify_signup(&self, token: &str) -> Result<()> {
        let body = serde_json::json!({ "type": "signup", "token": token });
        let response = Self::send(
            self.request(Method::POST, &self.auth_url("verify"), None)
                .json(&body),
        )
        .await?;
        Self::into_unit(response).await
    }
}

impl SessionClient {
    /// Confirm the installed credential pair with the backend and return
    /// the identity it belongs to.
    ///
    /// This is the explicit per-request re-authentication step; a stale
    /// pair surfaces as `AppError::SessionExpired` for the caller.
    pub async fn current_user(&self) -> Result<AuthUser> {
        self.client.current_user(&self.tokens).await
    }
}
