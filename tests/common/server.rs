//! Server helpers for integration tests
//!
//! [`TestApp`] drives the router in-process through `tower::ServiceExt`;
//! [`spawn_server`] serves it on an ephemeral port for HTTP clients.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceExt;
use uuid::Uuid;

use kanflow::backend::create_router;

use super::auth_helpers::auth_header;
use super::database::TestDatabase;

/// Router plus the database behind it
pub struct TestApp {
    pub db: TestDatabase,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let db = TestDatabase::new().await;
        let router = create_router(db.state());
        Self { db, router }
    }

    /// Send one request and decode the JSON body (`Null` when empty)
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, auth_header(token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, value)
    }

    /// Send a raw, possibly malformed body
    pub async fn request_raw(&self, method: Method, path: &str, token: &str, body: &str) -> StatusCode {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header(header::AUTHORIZATION, auth_header(token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed")
            .status()
    }

    pub async fn get(&self, path: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::GET, path, Some(token), None).await
    }

    pub async fn post(&self, path: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, path, Some(token), Some(body)).await
    }

    pub async fn put(&self, path: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, path, Some(token), Some(body)).await
    }

    pub async fn patch(&self, path: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, path, Some(token), Some(body)).await
    }

    pub async fn create_board(&self, token: &str, title: &str) -> Uuid {
        let (status, body) = self.post("/api/boards", token, json!({ "title": title })).await;
        assert_eq!(status, StatusCode::OK, "create board: {}", body);
        parse_id(&body)
    }

    pub async fn create_list(&self, token: &str, board_id: Uuid, title: &str) -> Uuid {
        let (status, body) = self
            .post("/api/lists", token, json!({ "title": title, "board_id": board_id }))
            .await;
        assert_eq!(status, StatusCode::OK, "create list: {}", body);
        parse_id(&body)
    }

    pub async fn create_card(&self, token: &str, list_id: Uuid, title: &str) -> Uuid {
        let (status, body) = self
            .post("/api/cards", token, json!({ "title": title, "list_id": list_id }))
            .await;
        assert_eq!(status, StatusCode::OK, "create card: {}", body);
        parse_id(&body)
    }

    /// Ids of the active cards of a list as the API returns them
    pub async fn card_ids(&self, token: &str, list_id: Uuid) -> Vec<Uuid> {
        let (status, body) = self.get(&format!("/api/cards/{}", list_id), token).await;
        assert_eq!(status, StatusCode::OK, "get cards: {}", body);
        body.as_array()
            .expect("card array")
            .iter()
            .map(parse_id)
            .collect()
    }
}

/// `id` field of a JSON entity
pub fn parse_id(body: &Value) -> Uuid {
    body["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .unwrap_or_else(|| panic!("missing id in {}", body))
}

/// A server listening on `127.0.0.1` at an ephemeral port
pub struct SpawnedServer {
    pub base_url: String,
    pub db: TestDatabase,
    handle: JoinHandle<()>,
}

impl Drop for SpawnedServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub async fn spawn_server() -> SpawnedServer {
    let db = TestDatabase::new().await;
    let app = create_router(db.state());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    SpawnedServer {
        base_url: format!("http://{}", addr),
        db,
        handle,
    }
}
