// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use profile_portal::config::Config;
use profile_portal::routes::create_router;
use profile_portal::supabase::SupabaseClient;
use profile_portal::AppState;

/// Create a test app pointed at a mocked backend URL.
#[allow(dead_code)]
pub fn create_test_app(supabase_url: &str) -> (Router, Arc<AppState>) {
    let mut config = Config::test_default();
    config.supabase_url = supabase_url.trim_end_matches('/').to_string();

    let supabase = SupabaseClient::new(&config);
    let state = Arc::new(AppState { config, supabase });

    (create_router(state.clone()), state)
}

#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn post_form(app: &Router, uri: &str, body: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

#[allow(dead_code)]
pub async fn delete(app: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Extract the session cookie pair ("id=...") from a response.
#[allow(dead_code)]
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("id="))
        .and_then(|value| value.split(';').next())
        .map(|value| value.to_string())
}

#[allow(dead_code)]
pub fn location(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

#[allow(dead_code)]
pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Mount a successful password-grant mock on the backend.
#[allow(dead_code)]
pub async fn mock_sign_in_success(server: &MockServer, user_id: Uuid, email: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "access-token-1",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh-token-1",
            "user": {
                "id": user_id,
                "email": email,
                "email_confirmed_at": "2026-01-01T00:00:00Z"
            }
        })))
        .mount(server)
        .await;
}

/// Sign in against a mocked backend and return the session cookie.
#[allow(dead_code)]
pub async fn sign_in(app: &Router, server: &MockServer, user_id: Uuid, email: &str) -> String {
    mock_sign_in_success(server, user_id, email).await;

    let response = post_form(
        app,
        "/signin",
        &format!("email={}&password=secret1", urlencode(email)),
        None,
    )
    .await;

    session_cookie(&response).expect("sign-in should set a session cookie")
}

/// Minimal form-encoding for test inputs (email addresses mostly).
#[allow(dead_code)]
pub fn urlencode(input: &str) -> String {
    input.replace('@', "%40").replace('+', "%2B")
}
