//! Environment-sourced configuration, loaded once at boot and immutable
//! afterwards.

use std::env;

use crate::error::{ClResult, Error};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Server configuration.
///
/// The admin credentials and the webhook settings are optional here on
/// purpose: their absence is surfaced as a 500 by the endpoint that needs
/// them, while the signing secret is checked at startup (a missing or short
/// secret refuses to boot). There are no fallback values for any secret.
#[derive(Clone)]
pub struct Config {
	pub listen: Box<str>,
	pub admin_secret: Box<str>,
	pub admin_username: Option<Box<str>>,
	pub admin_password_hash: Option<Box<str>>,
	pub sheets_webhook_url: Option<Box<str>>,
	pub sheets_webhook_secret: Option<Box<str>>,
	pub allowed_origin: Box<str>,
}

impl Config {
	pub fn from_env() -> ClResult<Config> {
		let port = match env::var("PORT") {
			Ok(port) => port.parse::<u16>().map_err(|_| Error::ConfigError("PORT must be a port number"))?,
			Err(_) => DEFAULT_PORT,
		};

		let admin_secret =
			env::var("ADMIN_SECRET").map_err(|_| Error::ConfigError("ADMIN_SECRET not configured"))?;

		Ok(Config {
			listen: format!("0.0.0.0:{}", port).into(),
			admin_secret: admin_secret.into(),
			admin_username: env::var("ADMIN_USERNAME").ok().map(Into::into),
			admin_password_hash: env::var("ADMIN_PASSWORD_HASH").ok().map(Into::into),
			sheets_webhook_url: env::var("SHEETS_WEBHOOK_URL").ok().map(Into::into),
			sheets_webhook_secret: env::var("SHEETS_WEBHOOK_SECRET").ok().map(Into::into),
			allowed_origin: env::var("ALLOWED_ORIGIN")
				.unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string())
				.into(),
		})
	}
}

// Keep secrets out of debug output.
impl std::fmt::Debug for Config {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Config")
			.field("listen", &self.listen)
			.field("admin_username", &self.admin_username)
			.field("allowed_origin", &self.allowed_origin)
			.field("sheets_webhook_url", &self.sheets_webhook_url)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn debug_output_redacts_secrets() {
		let config = Config {
			listen: "0.0.0.0:5000".into(),
			admin_secret: "0123456789abcdef0123456789abcdef".into(),
			admin_username: Some("admin".into()),
			admin_password_hash: Some("$2b$10$abcdefghijklmnopqrstuv".into()),
			sheets_webhook_url: None,
			sheets_webhook_secret: Some("hook-secret".into()),
			allowed_origin: DEFAULT_ALLOWED_ORIGIN.into(),
		};
		let out = format!("{:?}", config);
		assert!(!out.contains("0123456789abcdef"));
		assert!(!out.contains("$2b$10$"));
		assert!(!out.contains("hook-secret"));
	}
}

// vim: ts=4
