use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::AdminPrincipal;
use crate::prelude::*;

// Extractors //
//************//

// Auth //
//******//
/// The admin principal attached by the auth middleware. Extracting it on a
/// route the middleware does not cover rejects with 401.
#[derive(Debug, Clone)]
pub struct Auth(pub AdminPrincipal);

impl<S> FromRequestParts<S> for Auth
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		parts.extensions.get::<Auth>().cloned().ok_or(Error::TokenInvalid)
	}
}

// vim: ts=4
