//! Common test utilities and helpers
//!
//! Shared infrastructure for the integration tests: the in-memory store
//! adapter, request plumbing, and sample request bodies.

pub mod adapters;
pub mod fixtures;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use traveltrail::{App, AppBuilder, Config};

pub use adapters::MockStoreAdapter;

/// Signing secret used by every test app (32+ chars).
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";
pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "admin1233";

/// Low-cost bcrypt hash of [`TEST_PASSWORD`]; cost 4 keeps the suite fast.
pub fn test_password_hash() -> String {
	bcrypt::hash(TEST_PASSWORD, 4).expect("bcrypt hash")
}

pub fn test_config(with_admin_credentials: bool) -> Config {
	Config {
		listen: "127.0.0.1:0".into(),
		admin_secret: TEST_SECRET.into(),
		admin_username: with_admin_credentials.then(|| TEST_USERNAME.into()),
		admin_password_hash: with_admin_credentials.then(|| test_password_hash().into()),
		sheets_webhook_url: None,
		sheets_webhook_secret: None,
		allowed_origin: "http://localhost:3000".into(),
	}
}

/// Build an app + router over a fresh mock store.
pub fn test_app() -> (Arc<MockStoreAdapter>, App, axum::Router) {
	let store = Arc::new(MockStoreAdapter::default());
	let mut builder = AppBuilder::new();
	builder.config(test_config(true)).store_adapter(store.clone());
	let (app, router) = builder.build().expect("test app builds");
	(store, app, router)
}

/// Fire a request and collect `(status, parsed JSON body)`.
pub async fn send_json(
	router: &axum::Router,
	method: &str,
	uri: &str,
	token: Option<&str>,
	body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
	let mut builder = Request::builder().method(method).uri(uri);
	if let Some(token) = token {
		builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
	}
	let request = match body {
		Some(body) => builder
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(body.to_string()))
			.expect("request"),
		None => builder.body(Body::empty()).expect("request"),
	};

	let response = router.clone().oneshot(request).await.expect("response");
	let status = response.status();
	let bytes = response.into_body().collect().await.expect("body").to_bytes();
	let value = if bytes.is_empty() {
		serde_json::Value::Null
	} else {
		serde_json::from_slice(&bytes).expect("JSON body")
	};
	(status, value)
}

/// Log in through the API and return the issued token.
pub async fn login_token(router: &axum::Router) -> String {
	let (status, body) = send_json(
		router,
		"POST",
		"/api/admin/login",
		None,
		Some(serde_json::json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD })),
	)
	.await;
	assert_eq!(status, StatusCode::OK, "login should succeed: {body}");
	body["adminToken"].as_str().expect("adminToken").to_string()
}

/// Craft a token that expired beyond the clock-skew tolerance, signed with
/// the test secret.
pub fn expired_token(username: &str) -> String {
	#[derive(serde::Serialize)]
	struct Claims<'a> {
		username: &'a str,
		iat: i64,
		exp: i64,
	}

	let now = std::time::SystemTime::now()
		.duration_since(std::time::SystemTime::UNIX_EPOCH)
		.expect("clock")
		.as_secs() as i64;
	let claims = Claims { username, iat: now - 7500, exp: now - 300 };

	jsonwebtoken::encode(
		&jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
		&claims,
		&jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
	)
	.expect("expired token")
}
