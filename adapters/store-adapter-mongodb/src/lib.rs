//! MongoDB implementation of the TravelTrail store adapter.
//!
//! One collection per resource (`cmsPages`, `trips`, `accommodations`);
//! identifiers are ObjectIds carried as 24-hex strings on the trait
//! boundary. Construction connects and pings, so a broken database is
//! caught at startup rather than on the first request.

use async_trait::async_trait;
use mongodb::{Client, Collection, Database, bson::Document, bson::doc};

use traveltrail::prelude::*;
use traveltrail::store_adapter::{
	Accommodation, AccommodationFilter, AccommodationSummary, CmsPage, CmsPageData, StoreAdapter,
	Trip, TripFilter, UpdateOutcome,
};

mod accommodation;
mod cms;
mod trip;
mod utils;

pub const DEFAULT_DATABASE: &str = "traveltrailCMS";

pub struct StoreAdapterMongo {
	db: Database,
}

impl StoreAdapterMongo {
	/// Connect to the cluster and ping the target database. Callers treat
	/// a failure here as fatal.
	pub async fn new(uri: &str, database: &str) -> ClResult<Self> {
		let client = Client::with_uri_str(uri)
			.await
			.inspect_err(utils::inspect)
			.map_err(|_| Error::DbError)?;
		let db = client.database(database);
		db.run_command(doc! { "ping": 1 })
			.await
			.inspect_err(utils::inspect)
			.map_err(|_| Error::DbError)?;
		info!("Connected to MongoDB database {}", database);

		Ok(Self { db })
	}

	fn cms_pages(&self) -> Collection<Document> {
		self.db.collection("cmsPages")
	}

	fn trips(&self) -> Collection<Document> {
		self.db.collection("trips")
	}

	fn accommodations(&self) -> Collection<Document> {
		self.db.collection("accommodations")
	}
}

impl std::fmt::Debug for StoreAdapterMongo {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("StoreAdapterMongo").field("database", &self.db.name()).finish()
	}
}

#[async_trait]
impl StoreAdapter for StoreAdapterMongo {
	async fn read_cms_page(&self, key: &str) -> ClResult<Option<CmsPage>> {
		cms::read_page(&self.cms_pages(), key).await
	}

	async fn upsert_cms_page(&self, key: &str, data: &CmsPageData) -> ClResult<()> {
		cms::upsert_page(&self.cms_pages(), key, data).await
	}

	async fn list_trips(&self) -> ClResult<Vec<Trip>> {
		trip::list(&self.trips()).await
	}

	async fn read_trip(&self, trip_id: &str) -> ClResult<Option<Trip>> {
		trip::read(&self.trips(), trip_id).await
	}

	async fn create_trip(&self, trip: &Trip) -> ClResult<Box<str>> {
		trip::create(&self.trips(), trip).await
	}

	async fn update_trip(&self, trip_id: &str, patch: &Patch) -> ClResult<UpdateOutcome> {
		trip::update(&self.trips(), trip_id, patch).await
	}

	async fn delete_trip(&self, trip_id: &str) -> ClResult<u64> {
		trip::delete(&self.trips(), trip_id).await
	}

	async fn distinct_trip_values(&self, filter: TripFilter) -> ClResult<Vec<serde_json::Value>> {
		trip::distinct_values(&self.trips(), filter).await
	}

	async fn list_accommodation_summaries(&self) -> ClResult<Vec<AccommodationSummary>> {
		accommodation::list_summaries(&self.accommodations()).await
	}

	async fn read_accommodation(&self, accommodation_id: &str) -> ClResult<Option<Accommodation>> {
		accommodation::read(&self.accommodations(), accommodation_id).await
	}

	async fn create_accommodation(&self, accommodation: &Accommodation) -> ClResult<Box<str>> {
		accommodation::create(&self.accommodations(), accommodation).await
	}

	async fn update_accommodation(
		&self,
		accommodation_id: &str,
		patch: &Patch,
	) -> ClResult<UpdateOutcome> {
		accommodation::update(&self.accommodations(), accommodation_id, patch).await
	}

	async fn delete_accommodation(&self, accommodation_id: &str) -> ClResult<u64> {
		accommodation::delete(&self.accommodations(), accommodation_id).await
	}

	async fn distinct_accommodation_values(
		&self,
		filter: AccommodationFilter,
	) -> ClResult<Vec<serde_json::Value>> {
		accommodation::distinct_values(&self.accommodations(), filter).await
	}
}

// vim: ts=4
