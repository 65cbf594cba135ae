// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Signup, password-reset, and verification-callback flows.

use axum::http::StatusCode;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

#[tokio::test]
async fn test_signup_redirects_to_verification_notice() {
    let server = MockServer::start().await;
    let (app, _) = common::create_test_app(&server.uri());

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": Uuid::new_v4(),
            "email": "a@x.com",
            "confirmation_sent_at": "2026-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = common::post_form(&app, "/signup", "email=a%40x.com&password=secret1", None).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response).as_deref(), Some("/verify"));
    // Signup never signs the user in
    assert!(common::session_cookie(&response).is_none());

    server.verify().await;
}

#[tokio::test]
async fn test_signup_duplicate_account_shows_category() {
    let server = MockServer::start().await;
    let (app, _) = common::create_test_app(&server.uri());

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "error_code": "user_already_exists",
            "msg": "User already registered"
        })))
        .mount(&server)
        .await;

    let response = common::post_form(&app, "/signup", "email=a%40x.com&password=secret1", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("An account with this email already exists."));
    assert!(!body.contains("user_already_exists"));
}

#[tokio::test]
async fn test_password_reset_shows_fixed_confirmation() {
    let server = MockServer::start().await;
    let (app, _) = common::create_test_app(&server.uri());

    Mock::given(method("POST"))
        .and(path("/auth/v1/recover"))
        .and(body_json(serde_json::json!({ "email": "a@x.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let response = common::post_form(&app, "/password-reset", "email=a%40x.com", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_string(response).await;
    assert!(body.contains("Password reset instructions have been sent to your email."));

    server.verify().await;
}

#[tokio::test]
async fn test_verify_callback_forwards_signup_token() {
    let server = MockServer::start().await;
    let (app, _) = common::create_test_app(&server.uri());

    Mock::given(method("POST"))
        .and(path("/auth/v1/verify"))
        .and(body_json(serde_json::json!({
            "type": "signup",
            "token": "verification-token"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let response = common::get(
        &app,
        "/verify-callback?token=verification-token&type=signup",
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response).as_deref(), Some("/signin"));

    server.verify().await;
}
