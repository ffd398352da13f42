// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;

use hodolog::application::commands::posts::CreatePostCommand;
use hodolog::application::services::ApplicationServices;
use hodolog::domain::post::{PostId, PostReadRepository, PostWriteRepository, TitlePolicy};
use hodolog::infrastructure::repositories::InMemoryPostRepository;
use hodolog::presentation::http::{routes::build_router, state::HttpState};

pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub repo: InMemoryPostRepository,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_policy(TitlePolicy::default())
    }

    pub fn with_policy(title_policy: TitlePolicy) -> Self {
        let repo = InMemoryPostRepository::new();
        let write: Arc<dyn PostWriteRepository> = Arc::new(repo.clone());
        let read: Arc<dyn PostReadRepository> = Arc::new(repo.clone());
        let services = Arc::new(ApplicationServices::new(write, read, title_policy));
        Self { services, repo }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &["http://localhost:3000".to_string()])
    }

    pub async fn write(&self, title: &str, content: &str) -> PostId {
        self.services
            .post_commands
            .create_post(CreatePostCommand::new(title, content))
            .await
            .expect("create post")
    }

    /// Writes `title {i}` / `content {i}` for i in `range`, in order.
    pub async fn seed(&self, range: std::ops::Range<usize>) -> Vec<PostId> {
        let mut ids = Vec::new();
        for i in range {
            ids.push(self.write(&format!("title {i}"), &format!("content {i}")).await);
        }
        ids
    }
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(resp: Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body_bytes(resp).await;
    serde_json::from_slice(&bytes).expect("expected a json body")
}

/// Assert the `{code, message, validation}` error shape and return the body.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode) -> Value {
    assert_eq!(resp.status(), expected_status);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );

    let json = body_json(resp).await;
    assert_eq!(
        json["code"].as_str(),
        Some(expected_status.as_str()),
        "unexpected code in {json}"
    );
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected a message in {json}"
    );
    assert!(json["validation"].is_object(), "expected a validation map in {json}");
    json
}
