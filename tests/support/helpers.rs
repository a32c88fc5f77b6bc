// tests/support/helpers.rs
use super::mocks::{RecordingLogger, StubFindUserById, StubListUsers};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;
use user_api::application::dto::UserDto;
use user_api::application::services::ApplicationServices;
use user_api::presentation::http::{routes::build_router, state::HttpState};

pub struct TestApp {
    pub router: axum::Router,
    pub list_users: Arc<StubListUsers>,
    pub find_user: Arc<StubFindUserById>,
    pub logger: Arc<RecordingLogger>,
}

impl TestApp {
    pub fn new(list_users: StubListUsers, find_user: StubFindUserById) -> Self {
        let list_users = Arc::new(list_users);
        let find_user = Arc::new(find_user);
        let logger = Arc::new(RecordingLogger::default());

        let services = ApplicationServices::from_use_cases(list_users.clone(), find_user.clone());
        let state = HttpState::new(&services, logger.clone());
        let router = build_router(state, &["http://localhost:3000".to_string()]);

        Self {
            router,
            list_users,
            find_user,
            logger,
        }
    }

    /// Both use-cases backed by the same fixed user set.
    pub fn with_users(users: Vec<UserDto>) -> Self {
        Self::new(
            StubListUsers::returning(users.clone()),
            StubFindUserById::knowing(users),
        )
    }

    pub async fn get(&self, uri: &str) -> Response {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.router.clone().oneshot(req).await.unwrap()
    }
}

pub fn user(id: i64, name: &str) -> UserDto {
    UserDto {
        id,
        name: name.to_string(),
    }
}

/// Assert the status and JSON content type, then return the parsed body.
pub async fn json_body(resp: Response, expected_status: StatusCode) -> Value {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert an `ErrorResponse` body with the expected status and reason phrase.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    let json = json_body(resp, expected_status).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
