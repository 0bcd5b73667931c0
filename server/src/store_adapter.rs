//! Adapter trait for the document store backing the API.
//!
//! Every `StoreAdapter` implementation is responsible for one thing:
//! translating the typed, per-resource operations below into its native
//! collection queries. Identifier syntax is store-native, so parsing and
//! rejecting malformed ids happens inside the adapter; handlers only see
//! `Error::ValidationError` for a bad id, never a panic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::prelude::*;

/// A CMS page, keyed by a semantic `key` rather than a store-generated id.
#[skip_serializing_none]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CmsPage {
	#[serde(rename = "_id")]
	pub id: Option<Box<str>>,
	pub key: Box<str>,
	pub title: Box<str>,
	pub content: Box<str>,
}

/// The mutable part of a CMS page; the key comes from the request path.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CmsPageData {
	pub title: Box<str>,
	pub content: Box<str>,
}

/// A trip package document.
#[skip_serializing_none]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Trip {
	#[serde(rename = "_id")]
	pub id: Option<Box<str>>,
	pub name: Box<str>,
	pub desc: Box<str>,
	pub price: i64,
	#[serde(rename = "daysCount")]
	pub days_count: i64,
	#[serde(rename = "nightsCount")]
	pub nights_count: i64,
	pub category: Option<Box<str>>,
	pub theme: Option<Box<str>>,
	#[serde(default)]
	pub themes: Vec<Box<str>>,
	#[serde(default)]
	pub inclusions: Vec<Box<str>>,
	#[serde(default)]
	pub exclusions: Vec<Box<str>>,
	#[serde(default)]
	pub images: Vec<Box<str>>,
	/// Opaque day-by-day plans; the backend stores them as-is.
	#[serde(default)]
	pub itineraries: Vec<serde_json::Value>,
	#[serde(default)]
	pub availability: bool,
	#[serde(rename = "tripExpert")]
	pub trip_expert: Option<Box<str>>,
	pub destination: Option<Box<str>>,
}

/// An accommodation document.
#[skip_serializing_none]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Accommodation {
	#[serde(rename = "_id")]
	pub id: Option<Box<str>>,
	pub name: Box<str>,
	pub price: f64,
	#[serde(rename = "roomType")]
	pub room_type: Box<str>,
	#[serde(rename = "bedType")]
	pub bed_type: Box<str>,
	#[serde(rename = "maxOccupancy")]
	pub max_occupancy: i64,
	pub size: Box<str>,
	pub overview: Box<str>,
	#[serde(default)]
	pub images: Vec<Box<str>>,
	#[serde(default)]
	pub themes: Vec<Box<str>>,
	#[serde(default)]
	pub amenities: Vec<Box<str>>,
	pub destination: Option<Box<str>>,
}

/// Field subset the accommodation list endpoint returns, to keep the
/// listing payload small.
#[skip_serializing_none]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccommodationSummary {
	#[serde(rename = "_id")]
	pub id: Option<Box<str>>,
	pub name: Box<str>,
	pub price: f64,
	#[serde(rename = "roomType")]
	pub room_type: Box<str>,
	#[serde(rename = "maxOccupancy")]
	pub max_occupancy: i64,
	#[serde(default)]
	pub images: Vec<Box<str>>,
}

/// Result of an update-by-id, in the store's matched/modified terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOutcome {
	pub matched: u64,
	pub modified: u64,
}

/// Fields the trip filter endpoints expose distinct values for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripFilter {
	Destinations,
	Themes,
	Inclusions,
	Exclusions,
}

impl TripFilter {
	pub fn from_param(param: &str) -> Option<Self> {
		match param {
			"destinations" => Some(Self::Destinations),
			"themes" => Some(Self::Themes),
			"inclusions" => Some(Self::Inclusions),
			"exclusions" => Some(Self::Exclusions),
			_ => None,
		}
	}

	pub fn field(self) -> &'static str {
		match self {
			Self::Destinations => "destination",
			Self::Themes => "themes",
			Self::Inclusions => "inclusions",
			Self::Exclusions => "exclusions",
		}
	}
}

/// Fields the accommodation filter endpoints expose distinct values for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccommodationFilter {
	Destinations,
	Themes,
	Amenities,
}

impl AccommodationFilter {
	pub fn from_param(param: &str) -> Option<Self> {
		match param {
			"destinations" => Some(Self::Destinations),
			"themes" => Some(Self::Themes),
			"amenities" => Some(Self::Amenities),
			_ => None,
		}
	}

	pub fn field(self) -> &'static str {
		match self {
			Self::Destinations => "destination",
			Self::Themes => "themes",
			Self::Amenities => "amenities",
		}
	}
}

/// Flatten distinct values into a flat list of scalars and drop duplicates,
/// keeping first-seen order.
///
/// Stores unwind array-valued fields to different depths (and two stored
/// arrays can share elements), so adapters run their raw distinct results
/// through this before returning them.
pub fn flatten_distinct(values: Vec<serde_json::Value>) -> Vec<serde_json::Value> {
	let mut flat = Vec::with_capacity(values.len());
	let mut stack: Vec<serde_json::Value> = values.into_iter().rev().collect();
	while let Some(value) = stack.pop() {
		match value {
			serde_json::Value::Array(items) => stack.extend(items.into_iter().rev()),
			scalar => {
				if !flat.contains(&scalar) {
					flat.push(scalar);
				}
			}
		}
	}
	flat
}

/// A TravelTrail document store adapter.
///
/// Read methods return `None` for an absent document; handlers own the
/// client-facing 404 message. Counts come back in store terms so handlers
/// can relay them (`modifiedCount`) and decide 404 on zero matches.
#[async_trait]
pub trait StoreAdapter: Debug + Send + Sync {
	// CMS pages
	async fn read_cms_page(&self, key: &str) -> ClResult<Option<CmsPage>>;
	/// Update-or-insert keyed by `key`; pages are provisioned lazily.
	async fn upsert_cms_page(&self, key: &str, data: &CmsPageData) -> ClResult<()>;

	// Trips
	async fn list_trips(&self) -> ClResult<Vec<Trip>>;
	async fn read_trip(&self, trip_id: &str) -> ClResult<Option<Trip>>;
	/// Inserts a new trip and returns the store-generated identifier.
	async fn create_trip(&self, trip: &Trip) -> ClResult<Box<str>>;
	async fn update_trip(&self, trip_id: &str, patch: &Patch) -> ClResult<UpdateOutcome>;
	/// Returns the number of documents removed (0 or 1).
	async fn delete_trip(&self, trip_id: &str) -> ClResult<u64>;
	async fn distinct_trip_values(&self, filter: TripFilter) -> ClResult<Vec<serde_json::Value>>;

	// Accommodations
	async fn list_accommodation_summaries(&self) -> ClResult<Vec<AccommodationSummary>>;
	async fn read_accommodation(&self, accommodation_id: &str) -> ClResult<Option<Accommodation>>;
	async fn create_accommodation(&self, accommodation: &Accommodation) -> ClResult<Box<str>>;
	async fn update_accommodation(
		&self,
		accommodation_id: &str,
		patch: &Patch,
	) -> ClResult<UpdateOutcome>;
	async fn delete_accommodation(&self, accommodation_id: &str) -> ClResult<u64>;
	async fn distinct_accommodation_values(
		&self,
		filter: AccommodationFilter,
	) -> ClResult<Vec<serde_json::Value>>;
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn flatten_distinct_unnests_arrays() {
		let values = vec![json!("Beach"), json!(["Hills", "Safari"]), json!([["Beach"]])];
		let flat = flatten_distinct(values);
		assert_eq!(flat, vec![json!("Beach"), json!("Hills"), json!("Safari")]);
	}

	#[test]
	fn flatten_distinct_drops_duplicates_keeping_order() {
		let values = vec![json!("Wifi"), json!(["Pool", "Wifi"]), json!("Pool")];
		assert_eq!(flatten_distinct(values), vec![json!("Wifi"), json!("Pool")]);
	}

	#[test]
	fn flatten_distinct_passes_scalars_through() {
		let values = vec![json!("Goa"), json!("Kerala")];
		assert_eq!(flatten_distinct(values.clone()), values);
	}

	#[test]
	fn filter_params_resolve_to_store_fields() {
		assert_eq!(TripFilter::from_param("destinations"), Some(TripFilter::Destinations));
		assert_eq!(TripFilter::Destinations.field(), "destination");
		assert_eq!(TripFilter::from_param("amenities"), None);
		assert_eq!(AccommodationFilter::from_param("amenities"), Some(AccommodationFilter::Amenities));
	}

	#[test]
	fn trip_wire_names_are_camel_case() {
		let trip = Trip {
			id: None,
			name: "Goa Getaway".into(),
			desc: "Four days on the coast".into(),
			price: 25000,
			days_count: 4,
			nights_count: 3,
			category: None,
			theme: None,
			themes: vec!["beach".into()],
			inclusions: vec![],
			exclusions: vec![],
			images: vec![],
			itineraries: vec![],
			availability: true,
			trip_expert: None,
			destination: Some("Goa".into()),
		};
		let value = serde_json::to_value(&trip).unwrap();
		assert_eq!(value["daysCount"], 4);
		assert_eq!(value["nightsCount"], 3);
		assert!(value.get("_id").is_none());
		assert!(value.get("tripExpert").is_none());
	}
}

// vim: ts=4
