// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent user-facing responses.
//!
//! Backend failures carry full detail into the log but the browser only
//! ever sees one of a small closed set of categories.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Session expired or credentials rejected")]
    SessionExpired,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account already exists")]
    DuplicateAccount,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Backend unreachable: {0}")]
    Network(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message shown to the end user. Never contains backend detail.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Unauthorized | AppError::SessionExpired => "Please sign in to continue.",
            AppError::InvalidCredentials => "Invalid email or password.",
            AppError::DuplicateAccount => "An account with this email already exists.",
            AppError::BadRequest(_) => "The request could not be understood.",
            AppError::Network(_) => {
                "The service is temporarily unreachable. Please try again in a moment."
            }
            AppError::Backend(_) => "The service returned an unexpected error. Please try again.",
            AppError::Internal(_) => "Something went wrong on our side.",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Anonymous or stale-credential requests go back through signin
            AppError::Unauthorized | AppError::SessionExpired => {
                return Redirect::to("/signin").into_response();
            }
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::DuplicateAccount => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Network(detail) => {
                tracing::warn!(error = %detail, "Backend unreachable");
                StatusCode::BAD_GATEWAY
            }
            AppError::Backend(detail) => {
                tracing::error!(error = %detail, "Backend call failed");
                StatusCode::BAD_GATEWAY
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Html(crate::views::error_page(self.user_message()))).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
