// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Supabase client adapter.
//!
//! One process-wide [`SupabaseClient`] talks to the hosted auth (GoTrue)
//! and table (PostgREST) APIs. Handlers derive a request-scoped
//! [`SessionClient`] by installing the session's credential pair; that
//! step is explicit so a rejected pair is a value the caller handles,
//! not a swallowed side effect.

pub mod auth;
pub mod tables;

pub use auth::AuthUser;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::Config;
use crate::error::AppError;
use crate::models::TokenPair;

/// Process-wide Supabase client bound to a project URL and anon key.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    /// Create a new client from process configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }

    /// Install a credential pair, yielding a request-scoped handle whose
    /// calls run as the signed-in user.
    pub fn with_session(&self, tokens: &TokenPair) -> SessionClient {
        SessionClient {
            client: self.clone(),
            tokens: tokens.clone(),
        }
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Base request with the project API key; bearer token when a user
    /// credential is in play, the anon key otherwise.
    fn request(
        &self,
        method: reqwest::Method,
        url: &str,
        bearer: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, url).header("apikey", &self.anon_key);
        match bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder.bearer_auth(&self.anon_key),
        }
    }

    async fn send(builder: reqwest::RequestBuilder) -> Result<reqwest::Response, AppError> {
        builder
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))
    }

    /// Check response status and parse the JSON body.
    async fn into_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| AppError::Backend(format!("JSON parse error: {}", e)))
    }

    /// Check response status, discarding the body.
    async fn into_unit(response: reqwest::Response) -> Result<(), AppError> {
        Self::check_status(response).await.map(|_| ())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(classify_failure(status, &body))
    }
}

/// Request-scoped handle authorized with a user's credential pair.
#[derive(Clone)]
pub struct SessionClient {
    client: SupabaseClient,
    tokens: TokenPair,
}

impl SessionClient {
    fn access_token(&self) -> &str {
        &self.tokens.access_token
    }
}

/// Error payload shapes returned by the backend. GoTrue and PostgREST
/// use different field names, so everything is optional.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiErrorBody {
    fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    fn detail(&self) -> Option<&str> {
        self.error_description
            .as_deref()
            .or(self.msg.as_deref())
            .or(self.message.as_deref())
            .or(self.error.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// Map a failed backend response onto the closed error category set.
///
/// The raw status and body are logged here; callers surface only the
/// category message to the user.
fn classify_failure(status: StatusCode, raw_body: &str) -> AppError {
    let body = ApiErrorBody::parse(raw_body);
    let detail = body.detail().unwrap_or(raw_body).to_string();

    tracing::warn!(status = %status, detail = %detail, "Backend call rejected");

    let haystack = format!(
        "{} {}",
        body.error_code.as_deref().unwrap_or(""),
        detail
    )
    .to_lowercase();

    if haystack.contains("already registered")
        || haystack.contains("already exists")
        || haystack.contains("user_already_exists")
        || haystack.contains("email_exists")
    {
        return AppError::DuplicateAccount;
    }

    if haystack.contains("invalid login credentials")
        || haystack.contains("invalid_credentials")
        || haystack.contains("invalid_grant")
        || haystack.contains("email not confirmed")
        || haystack.contains("email_not_confirmed")
    {
        return AppError::InvalidCredentials;
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return AppError::SessionExpired;
    }

    AppError::Backend(format!("HTTP {}: {}", status, detail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_invalid_grant() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert!(matches!(
            classify_failure(StatusCode::BAD_REQUEST, body),
            AppError::InvalidCredentials
        ));
    }

    #[test]
    fn test_classify_unconfirmed_email_as_invalid_credentials() {
        let body = r#"{"error_code":"email_not_confirmed","msg":"Email not confirmed"}"#;
        assert!(matches!(
            classify_failure(StatusCode::BAD_REQUEST, body),
            AppError::InvalidCredentials
        ));
    }

    #[test]
    fn test_classify_duplicate_account() {
        let body = r#"{"error_code":"user_already_exists","msg":"User already registered"}"#;
        assert!(matches!(
            classify_failure(StatusCode::UNPROCESSABLE_ENTITY, body),
            AppError::DuplicateAccount
        ));
    }

    #[test]
    fn test_classify_unauthorized_as_session_expired() {
        let body = r#"{"message":"JWT expired"}"#;
        assert!(matches!(
            classify_failure(StatusCode::UNAUTHORIZED, body),
            AppError::SessionExpired
        ));
    }

    #[test]
    fn test_classify_server_error_keeps_detail_for_log_only() {
        let err = classify_failure(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        match err {
            AppError::Backend(detail) => assert!(detail.contains("boom")),
            other => panic!("expected Backend, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_unparseable_body() {
        let err = classify_failure(StatusCode::BAD_GATEWAY, "<html>upstream</html>");
        assert!(matches!(err, AppError::Backend(_)));
    }
}
