//! Production wiring: environment configuration, MongoDB store adapter,
//! HTTP server. Any startup failure (missing signing secret, unreachable
//! database) terminates the process with a non-zero exit code.

use std::{env, sync::Arc};

use traveltrail::prelude::*;
use traveltrail::{AppBuilder, Config};
use traveltrail_store_adapter_mongodb::{DEFAULT_DATABASE, StoreAdapterMongo};

#[tokio::main]
async fn main() {
	if let Err(err) = run().await {
		eprintln!("FATAL: {}", err);
		std::process::exit(1);
	}
}

async fn run() -> ClResult<()> {
	let _ = dotenvy::dotenv();

	let config = Config::from_env()?;
	let mongodb_uri =
		env::var("MONGODB_URI").map_err(|_| Error::ConfigError("MONGODB_URI not configured"))?;
	let database = env::var("MONGODB_DB").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());

	let store = Arc::new(StoreAdapterMongo::new(&mongodb_uri, &database).await?);

	let mut builder = AppBuilder::new();
	builder.config(config).store_adapter(store);
	builder.run().await
}

// vim: ts=4
