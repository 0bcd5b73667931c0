//! Password hashing helpers.
//!
//! bcrypt is deliberately slow, so both operations run on the blocking
//! thread pool instead of a runtime worker.

use crate::prelude::*;

const BCRYPT_COST: u32 = 10;

/// Generate a bcrypt hash suitable for the admin password configuration.
pub async fn generate_password_hash(password: Box<str>) -> ClResult<Box<str>> {
	let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password.as_ref(), BCRYPT_COST))
		.await
		.map_err(|_| Error::InvalidCredentials)?
		.map_err(|_| Error::InvalidCredentials)?;
	Ok(hash.into())
}

/// Check a password against a stored bcrypt hash.
///
/// A hash the library cannot parse counts as a mismatch (logged), so a
/// corrupt configuration reads as bad credentials rather than a crash.
pub async fn check_password(password: Box<str>, password_hash: Box<str>) -> ClResult<bool> {
	let res =
		tokio::task::spawn_blocking(move || bcrypt::verify(password.as_ref(), &password_hash))
			.await
			.map_err(|_| Error::InvalidCredentials)?;

	match res {
		Ok(matches) => Ok(matches),
		Err(err) => {
			warn!("password hash verification error: {}", err);
			Ok(false)
		}
	}
}


// vim: ts=4
