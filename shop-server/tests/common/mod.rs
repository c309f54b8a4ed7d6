//! Shared helpers for the HTTP integration tests
//!
//! Every test gets its own in-memory SurrealDB (`mem://`), so tests run in
//! parallel without sharing documents.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shop_server::{Authorizer, Config, ServerState, build_app};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: Value,
    pub text: String,
}

pub fn test_config() -> Config {
    Config::with_database_url("mem://")
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config()).await
}

pub async fn spawn_app_with(config: Config) -> TestApp {
    let state = ServerState::initialize(&config)
        .await
        .expect("in-memory database should start");
    TestApp {
        router: build_app(state.clone()),
        state,
    }
}

pub async fn spawn_app_with_authorizer(authorizer: impl Authorizer) -> TestApp {
    let state = ServerState::initialize(&test_config())
        .await
        .expect("in-memory database should start")
        .with_authorizer(authorizer);
    TestApp {
        router: build_app(state.clone()),
        state,
    }
}

impl TestApp {
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8_lossy(&bytes).to_string();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }
}

/// Key part of a "table:key" id
pub fn key_of(id: &Value) -> String {
    let id = id.as_str().expect("id should be a string");
    id.split_once(':').map(|(_, k)| k).unwrap_or(id).to_string()
}

pub fn product_body(name: &str) -> Value {
    json!({
        "name": name,
        "price": 19.9,
        "imageUrl": format!("/images/{}.png", name.to_lowercase()),
        "category": "home"
    })
}

pub fn order_body() -> Value {
    json!({
        "customer": {
            "name": "Ada Lovelace",
            "address": "12 Analytical Row",
            "phone": "555-0100",
            "notes": "Ring twice"
        },
        "cart": [
            { "id": 1, "title": "Desk Lamp", "price": "19.90", "quantity": 2 },
            { "id": 7, "title": "Shade", "price": "5.00", "quantity": 1 }
        ],
        "total": 44.8
    })
}
