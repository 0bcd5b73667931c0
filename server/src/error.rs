use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub type ClResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Malformed, missing or mistyped input. Carries the full violation list.
	ValidationError(String),
	MissingCredentials,
	InvalidCredentials,
	InvalidAuthHeader,
	TokenExpired,
	TokenInvalid,
	/// No matching document. Carries the resource-specific client message.
	NotFound(&'static str),
	/// Missing server-side configuration. The detail is logged, never sent.
	ConfigError(&'static str),
	/// The external webhook failed or returned garbage.
	UpstreamError(String),
	DbError,

	// externals
	Io(std::io::Error),
}

impl Error {
	pub fn status(&self) -> StatusCode {
		match self {
			Error::ValidationError(_) | Error::MissingCredentials => StatusCode::BAD_REQUEST,
			Error::InvalidCredentials
			| Error::InvalidAuthHeader
			| Error::TokenExpired
			| Error::TokenInvalid => StatusCode::UNAUTHORIZED,
			Error::NotFound(_) => StatusCode::NOT_FOUND,
			Error::ConfigError(_) | Error::UpstreamError(_) | Error::DbError | Error::Io(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}

	pub fn code(&self) -> &'static str {
		match self {
			Error::ValidationError(_) => "VALIDATION_ERROR",
			Error::MissingCredentials => "MISSING_CREDENTIALS",
			Error::InvalidCredentials => "INVALID_CREDENTIALS",
			Error::InvalidAuthHeader => "INVALID_AUTH_HEADER",
			Error::TokenExpired => "TOKEN_EXPIRED",
			Error::TokenInvalid => "INVALID_TOKEN",
			Error::NotFound(_) => "NOT_FOUND",
			Error::ConfigError(_) | Error::Io(_) => "SERVER_ERROR",
			Error::UpstreamError(_) => "UPSTREAM_ERROR",
			Error::DbError => "DB_ERROR",
		}
	}

	/// Client-visible message. Auth failures collapse into the generic
	/// "session expired" / "invalid credentials" pair; server-side detail
	/// stays in the logs.
	pub fn message(&self) -> String {
		match self {
			Error::ValidationError(detail) => detail.clone(),
			Error::MissingCredentials => "Username and password are required".into(),
			Error::InvalidCredentials => "Invalid username or password".into(),
			Error::InvalidAuthHeader => {
				"Authorization header must be: Bearer <token> or AdminToken <token>".into()
			}
			Error::TokenExpired => "Session expired".into(),
			Error::TokenInvalid => "Invalid credentials".into(),
			Error::NotFound(what) => (*what).into(),
			Error::ConfigError(_) => "Server configuration error".into(),
			Error::UpstreamError(_) | Error::Io(_) => "Internal server error".into(),
			Error::DbError => "Database operation failed".into(),
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::ValidationError(detail) => write!(f, "validation failed: {}", detail),
			Error::ConfigError(what) => write!(f, "configuration error: {}", what),
			Error::UpstreamError(detail) => write!(f, "upstream error: {}", detail),
			Error::Io(err) => write!(f, "io error: {}", err),
			_ => write!(f, "{:?}", self),
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		if self.status().is_server_error() {
			tracing::error!("request failed: {}", self);
		}
		let body = json!({
			"success": false,
			"code": self.code(),
			"message": self.message(),
		});
		(self.status(), Json(body)).into_response()
	}
}


// vim: ts=4
