//! Signed admin token codec.
//!
//! Tokens are compact HS256 JWTs binding the admin username to an issue
//! and expiry timestamp. Expiry is the only invalidation mechanism; there
//! is no revocation list.

use jsonwebtoken::{
	Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Tokens expire two hours after issue.
pub const TOKEN_EXPIRY: i64 = 2 * 3600;
/// Tolerated clock skew when comparing expiry timestamps.
pub const CLOCK_SKEW_LEEWAY: u64 = 15;
/// A shorter secret materially weakens HS256; refuse to start below this.
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AdminClaims {
	pub username: Box<str>,
	pub iat: Timestamp,
	pub exp: Timestamp,
}

/// Why verification failed. The three kinds are logged separately but
/// collapse into the client-facing expired/invalid pair via `From`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
	Malformed,
	BadSignature,
	Expired,
}

impl From<TokenError> for Error {
	fn from(err: TokenError) -> Self {
		match err {
			TokenError::Expired => Error::TokenExpired,
			TokenError::Malformed | TokenError::BadSignature => Error::TokenInvalid,
		}
	}
}

pub struct TokenCodec {
	encoding_key: EncodingKey,
	decoding_key: DecodingKey,
	validation: Validation,
}

impl TokenCodec {
	pub fn new(secret: &str) -> ClResult<Self> {
		if secret.len() < MIN_SECRET_LEN {
			return Err(Error::ConfigError("signing secret shorter than 32 characters"));
		}

		let mut validation = Validation::new(Algorithm::HS256);
		validation.leeway = CLOCK_SKEW_LEEWAY;

		Ok(TokenCodec {
			encoding_key: EncodingKey::from_secret(secret.as_bytes()),
			decoding_key: DecodingKey::from_secret(secret.as_bytes()),
			validation,
		})
	}

	/// Issue a token for `username`, expiring [`TOKEN_EXPIRY`] seconds from
	/// now.
	pub fn issue(&self, username: &str) -> ClResult<Box<str>> {
		self.issue_at(username, Timestamp::now())
	}

	fn issue_at(&self, username: &str, iat: Timestamp) -> ClResult<Box<str>> {
		let claims = AdminClaims {
			username: username.into(),
			iat,
			exp: Timestamp(iat.0 + TOKEN_EXPIRY),
		};
		let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
			.map_err(|_| Error::ConfigError("token signing failed"))?;
		Ok(token.into())
	}

	/// Verify signature and expiry. The algorithm is pinned to HS256.
	pub fn verify(&self, token: &str) -> Result<AdminClaims, TokenError> {
		decode::<AdminClaims>(token, &self.decoding_key, &self.validation)
			.map(|data| data.claims)
			.map_err(|err| match err.kind() {
				ErrorKind::ExpiredSignature => TokenError::Expired,
				ErrorKind::InvalidSignature => TokenError::BadSignature,
				_ => TokenError::Malformed,
			})
	}
}


// vim: ts=4
