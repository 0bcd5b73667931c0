//! In-memory mock store adapter.
//!
//! Mimics the store contract the MongoDB adapter provides: 24-hex
//! identifiers (malformed ids fail as validation errors before any
//! "query"), matched/modified counts, and flattened distinct values.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Mutex;

use traveltrail::prelude::*;
use traveltrail::store_adapter::{
	Accommodation, AccommodationFilter, AccommodationSummary, CmsPage, CmsPageData, StoreAdapter,
	Trip, TripFilter, UpdateOutcome, flatten_distinct,
};

#[derive(Debug, Default)]
pub struct MockStoreState {
	pub pages: BTreeMap<String, CmsPageData>,
	pub trips: BTreeMap<String, Map<String, Value>>,
	pub accommodations: BTreeMap<String, Map<String, Value>>,
	pub next_id: u32,
	/// Counts every insert attempt that reached the store.
	pub create_calls: u32,
}

#[derive(Debug, Default)]
pub struct MockStoreAdapter {
	pub state: Mutex<MockStoreState>,
}

impl MockStoreAdapter {
	pub fn with_state<T>(&self, f: impl FnOnce(&mut MockStoreState) -> T) -> T {
		f(&mut self.state.lock().expect("mock store lock"))
	}

	fn next_id(state: &mut MockStoreState) -> String {
		state.next_id += 1;
		format!("{:024x}", state.next_id)
	}
}

/// Same id syntax the MongoDB adapter enforces via ObjectId parsing.
fn check_id(id: &str) -> ClResult<()> {
	if id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit()) {
		Ok(())
	} else {
		Err(Error::ValidationError(format!("Invalid document id: {}", id)))
	}
}

fn to_map<T: serde::Serialize>(value: &T) -> Map<String, Value> {
	match serde_json::to_value(value).expect("serialize fixture") {
		Value::Object(map) => map,
		_ => unreachable!("documents are objects"),
	}
}

fn from_map<T: serde::de::DeserializeOwned>(id: &str, map: &Map<String, Value>) -> ClResult<T> {
	let mut map = map.clone();
	map.insert("_id".to_string(), Value::String(id.to_string()));
	serde_json::from_value(Value::Object(map)).map_err(|_| Error::DbError)
}

fn distinct_from(
	docs: &BTreeMap<String, Map<String, Value>>,
	field: &str,
) -> Vec<Value> {
	let values = docs.values().filter_map(|doc| doc.get(field).cloned()).collect();
	flatten_distinct(values)
}

#[async_trait]
impl StoreAdapter for MockStoreAdapter {
	async fn read_cms_page(&self, key: &str) -> ClResult<Option<CmsPage>> {
		self.with_state(|state| {
			Ok(state.pages.get(key).map(|data| CmsPage {
				id: None,
				key: key.into(),
				title: data.title.clone(),
				content: data.content.clone(),
			}))
		})
	}

	async fn upsert_cms_page(&self, key: &str, data: &CmsPageData) -> ClResult<()> {
		self.with_state(|state| {
			state.pages.insert(key.to_string(), data.clone());
			Ok(())
		})
	}

	async fn list_trips(&self) -> ClResult<Vec<Trip>> {
		self.with_state(|state| {
			state.trips.iter().map(|(id, map)| from_map(id, map)).collect()
		})
	}

	async fn read_trip(&self, trip_id: &str) -> ClResult<Option<Trip>> {
		check_id(trip_id)?;
		self.with_state(|state| {
			state.trips.get(trip_id).map(|map| from_map(trip_id, map)).transpose()
		})
	}

	async fn create_trip(&self, trip: &Trip) -> ClResult<Box<str>> {
		self.with_state(|state| {
			state.create_calls += 1;
			let id = Self::next_id(state);
			state.trips.insert(id.clone(), to_map(trip));
			Ok(id.into())
		})
	}

	async fn update_trip(&self, trip_id: &str, patch: &Patch) -> ClResult<UpdateOutcome> {
		check_id(trip_id)?;
		self.with_state(|state| {
			let Some(doc) = state.trips.get_mut(trip_id) else {
				return Ok(UpdateOutcome::default());
			};
			for (key, value) in patch {
				doc.insert(key.clone(), value.clone());
			}
			Ok(UpdateOutcome { matched: 1, modified: 1 })
		})
	}

	async fn delete_trip(&self, trip_id: &str) -> ClResult<u64> {
		check_id(trip_id)?;
		self.with_state(|state| Ok(u64::from(state.trips.remove(trip_id).is_some())))
	}

	async fn distinct_trip_values(&self, filter: TripFilter) -> ClResult<Vec<Value>> {
		self.with_state(|state| Ok(distinct_from(&state.trips, filter.field())))
	}

	async fn list_accommodation_summaries(&self) -> ClResult<Vec<AccommodationSummary>> {
		self.with_state(|state| {
			state
				.accommodations
				.iter()
				.map(|(id, map)| {
					let full: Accommodation = from_map(id, map)?;
					Ok(AccommodationSummary {
						id: full.id,
						name: full.name,
						price: full.price,
						room_type: full.room_type,
						max_occupancy: full.max_occupancy,
						images: full.images,
					})
				})
				.collect()
		})
	}

	async fn read_accommodation(&self, accommodation_id: &str) -> ClResult<Option<Accommodation>> {
		check_id(accommodation_id)?;
		self.with_state(|state| {
			state
				.accommodations
				.get(accommodation_id)
				.map(|map| from_map(accommodation_id, map))
				.transpose()
		})
	}

	async fn create_accommodation(&self, accommodation: &Accommodation) -> ClResult<Box<str>> {
		self.with_state(|state| {
			state.create_calls += 1;
			let id = Self::next_id(state);
			state.accommodations.insert(id.clone(), to_map(accommodation));
			Ok(id.into())
		})
	}

	async fn update_accommodation(
		&self,
		accommodation_id: &str,
		patch: &Patch,
	) -> ClResult<UpdateOutcome> {
		check_id(accommodation_id)?;
		self.with_state(|state| {
			let Some(doc) = state.accommodations.get_mut(accommodation_id) else {
				return Ok(UpdateOutcome::default());
			};
			for (key, value) in patch {
				doc.insert(key.clone(), value.clone());
			}
			Ok(UpdateOutcome { matched: 1, modified: 1 })
		})
	}

	async fn delete_accommodation(&self, accommodation_id: &str) -> ClResult<u64> {
		check_id(accommodation_id)?;
		self.with_state(|state| {
			Ok(u64::from(state.accommodations.remove(accommodation_id).is_some()))
		})
	}

	async fn distinct_accommodation_values(
		&self,
		filter: AccommodationFilter,
	) -> ClResult<Vec<Value>> {
		self.with_state(|state| Ok(distinct_from(&state.accommodations, filter.field())))
	}
}
