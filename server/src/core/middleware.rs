//! Custom middlewares

use axum::{
	body::Body,
	extract::State,
	http::{Request, header, response::Response},
	middleware::Next,
};

use crate::auth::AdminPrincipal;
use crate::core::Auth;
use crate::prelude::*;

/// Extract the token from an `Authorization` header value.
///
/// Two schemes carry the same admin token: the standard `Bearer` and the
/// legacy `AdminToken` used by older admin frontends.
pub(crate) fn parse_auth_header(value: &str) -> Option<&str> {
	let (scheme, token) = value.split_once(' ')?;
	if scheme != "Bearer" && scheme != "AdminToken" {
		return None;
	}
	let token = token.trim();
	(!token.is_empty()).then_some(token)
}

/// Log-safe token prefix. Never log a full token.
fn truncate_token(token: &str) -> String {
	token.chars().take(15).collect()
}

pub async fn require_auth(
	State(app): State<App>,
	mut req: Request<Body>,
	next: Next,
) -> ClResult<Response<Body>> {
	let auth_header = req
		.headers()
		.get(header::AUTHORIZATION)
		.and_then(|h| h.to_str().ok())
		.ok_or(Error::InvalidAuthHeader)?;

	let token = parse_auth_header(auth_header).ok_or(Error::InvalidAuthHeader)?;

	let claims = app.token_codec.verify(token).map_err(|err| {
		warn!("token verification failed ({:?}): {}…", err, truncate_token(token));
		Error::from(err)
	})?;
	debug!("valid token for admin {}", claims.username);

	req.extensions_mut().insert(Auth(AdminPrincipal { username: claims.username }));

	Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_both_schemes() {
		assert_eq!(parse_auth_header("Bearer abc.def.ghi"), Some("abc.def.ghi"));
		assert_eq!(parse_auth_header("AdminToken abc.def.ghi"), Some("abc.def.ghi"));
	}

	#[test]
	fn rejects_unknown_scheme_and_empty_token() {
		assert_eq!(parse_auth_header("Basic abc"), None);
		assert_eq!(parse_auth_header("bearer abc"), None);
		assert_eq!(parse_auth_header("Bearer "), None);
		assert_eq!(parse_auth_header("Bearer"), None);
		assert_eq!(parse_auth_header(""), None);
	}

	#[test]
	fn trims_surrounding_whitespace_from_token() {
		assert_eq!(parse_auth_header("Bearer   abc  "), Some("abc"));
	}

	#[test]
	fn truncation_caps_logged_tokens() {
		let token = "a".repeat(200);
		assert_eq!(truncate_token(&token).len(), 15);
		assert_eq!(truncate_token("short"), "short");
	}
}

// vim: ts=4
