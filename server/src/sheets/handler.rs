//! Pass-through relay to the external spreadsheet-ingestion webhook.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::Value;

use crate::core::validate::require_object;
use crate::prelude::*;

/// # POST /api/sheets-proxy
/// Augments the payload with the server-held shared secret, POSTs it to the
/// configured webhook and relays its status code and JSON body. The webhook
/// is fire-and-forget from this system's perspective: no retry, any
/// network or parse failure collapses to an opaque 500.
pub async fn post_sheets_proxy(
	State(app): State<App>,
	Json(body): Json<Value>,
) -> ClResult<(StatusCode, Json<Value>)> {
	let Some(webhook_url) = &app.config.sheets_webhook_url else {
		error!("sheets webhook URL not configured");
		return Err(Error::ConfigError("sheets webhook URL not configured"));
	};

	let mut payload = require_object(body)?;
	if let Some(secret) = &app.config.sheets_webhook_secret {
		payload.insert("secret".to_string(), Value::String(secret.to_string()));
	}

	let res = app
		.http_client
		.post(webhook_url.as_ref())
		.json(&Value::Object(payload))
		.send()
		.await
		.map_err(|err| Error::UpstreamError(format!("webhook request failed: {}", err)))?;

	let status = StatusCode::from_u16(res.status().as_u16())
		.map_err(|_| Error::UpstreamError("webhook returned an unusable status".into()))?;
	let body: Value = res
		.json()
		.await
		.map_err(|err| Error::UpstreamError(format!("webhook returned invalid JSON: {}", err)))?;

	Ok((status, Json(body)))
}

// vim: ts=4
