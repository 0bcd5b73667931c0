//! Admin authentication handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::auth::crypto;
use crate::core::Auth;
use crate::prelude::*;

/// # POST /api/admin/login
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct LoginReq {
	username: String,
	password: String,
}

#[derive(Serialize)]
pub struct LoginUser {
	username: String,
}

#[derive(Serialize)]
pub struct LoginRes {
	success: bool,
	#[serde(rename = "adminToken")]
	admin_token: String,
	user: LoginUser,
}

pub async fn post_login(
	State(app): State<App>,
	Json(login): Json<LoginReq>,
) -> ClResult<(StatusCode, Json<LoginRes>)> {
	let username = login.username.trim();
	let password = login.password.trim();

	if username.is_empty() || password.is_empty() {
		return Err(Error::MissingCredentials);
	}

	let (Some(admin_username), Some(admin_password_hash)) =
		(&app.config.admin_username, &app.config.admin_password_hash)
	else {
		error!("Admin credentials not configured");
		return Err(Error::ConfigError("admin credentials not configured"));
	};

	// Evaluate both checks before branching, so a rejected username costs
	// roughly the same as a rejected password.
	let username_ok = username == admin_username.as_ref();
	let password_ok = crypto::check_password(password.into(), admin_password_hash.clone()).await?;

	if !(username_ok && password_ok) {
		return Err(Error::InvalidCredentials);
	}

	let token = app.token_codec.issue(username)?;
	info!("admin {} logged in", username);

	Ok((
		StatusCode::OK,
		Json(LoginRes {
			success: true,
			admin_token: token.into(),
			user: LoginUser { username: username.into() },
		}),
	))
}

/// # GET /api/admin/check-auth
#[derive(Serialize)]
pub struct CheckAuthRes {
	authenticated: bool,
}

pub async fn get_check_auth(Auth(admin): Auth) -> ClResult<Json<CheckAuthRes>> {
	debug!("auth check for {}", admin.username);
	Ok(Json(CheckAuthRes { authenticated: true }))
}

// vim: ts=4
