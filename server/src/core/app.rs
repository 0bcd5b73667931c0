//! App state type and builder.

use std::sync::Arc;

use crate::auth::token::TokenCodec;
use crate::core::config::Config;
use crate::prelude::*;
use crate::routes;
use crate::store_adapter::StoreAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub config: Config,
	pub token_codec: TokenCodec,
	pub http_client: reqwest::Client,

	pub store: Arc<dyn StoreAdapter>,
}

pub type App = Arc<AppState>;

pub struct AppBuilder {
	config: Option<Config>,
	store: Option<Arc<dyn StoreAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder { config: None, store: None }
	}

	pub fn config(&mut self, config: Config) -> &mut Self {
		self.config = Some(config);
		self
	}

	pub fn store_adapter(&mut self, store: Arc<dyn StoreAdapter>) -> &mut Self {
		self.store = Some(store);
		self
	}

	/// Assemble the application state and router without serving. Startup
	/// validation (signing secret length, CORS origin syntax) happens here,
	/// so a misconfigured process fails before binding a socket.
	pub fn build(self) -> ClResult<(App, axum::Router)> {
		let config = self.config.ok_or(Error::ConfigError("no configuration provided"))?;
		let store = self.store.ok_or(Error::ConfigError("no store adapter provided"))?;
		let token_codec = TokenCodec::new(&config.admin_secret)?;

		let app: App = Arc::new(AppState {
			config,
			token_codec,
			http_client: reqwest::Client::new(),
			store,
		});
		let router = routes::init(app.clone())?;

		Ok((app, router))
	}

	pub async fn run(self) -> ClResult<()> {
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();
		info!("TravelTrail CMS backend v{}", VERSION);

		let (app, router) = self.build()?;

		let listener = tokio::net::TcpListener::bind(app.config.listen.as_ref()).await?;
		info!("Listening on {}", app.config.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
