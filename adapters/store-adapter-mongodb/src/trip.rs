//! Trip collection operations.

use futures::TryStreamExt;
use mongodb::{
	Collection,
	bson::{self, Document, doc},
};

use traveltrail::prelude::*;
use traveltrail::store_adapter::{Trip, TripFilter, UpdateOutcome, flatten_distinct};

use crate::utils::{inserted_id, inspect, parse_oid, patch_to_doc, take_id, to_insert_doc};

fn from_doc(mut doc: Document) -> ClResult<Trip> {
	let id = take_id(&mut doc);
	let mut trip: Trip = bson::from_document(doc).map_err(|err| {
		warn!("BSON decode: {}", err);
		Error::DbError
	})?;
	trip.id = id;
	Ok(trip)
}

pub(crate) async fn list(coll: &Collection<Document>) -> ClResult<Vec<Trip>> {
	let mut cursor = coll.find(doc! {}).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	let mut trips = Vec::new();
	while let Some(doc) =
		cursor.try_next().await.inspect_err(inspect).map_err(|_| Error::DbError)?
	{
		trips.push(from_doc(doc)?);
	}
	Ok(trips)
}

pub(crate) async fn read(coll: &Collection<Document>, trip_id: &str) -> ClResult<Option<Trip>> {
	let oid = parse_oid(trip_id)?;
	let doc = coll
		.find_one(doc! { "_id": oid })
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	doc.map(from_doc).transpose()
}

pub(crate) async fn create(coll: &Collection<Document>, trip: &Trip) -> ClResult<Box<str>> {
	let doc = to_insert_doc(trip)?;
	let res = coll.insert_one(doc).await.inspect_err(inspect).map_err(|_| Error::DbError)?;
	inserted_id(res)
}

pub(crate) async fn update(
	coll: &Collection<Document>,
	trip_id: &str,
	patch: &Patch,
) -> ClResult<UpdateOutcome> {
	let oid = parse_oid(trip_id)?;
	let res = coll
		.update_one(doc! { "_id": oid }, doc! { "$set": patch_to_doc(patch)? })
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(UpdateOutcome { matched: res.matched_count, modified: res.modified_count })
}

pub(crate) async fn delete(coll: &Collection<Document>, trip_id: &str) -> ClResult<u64> {
	let oid = parse_oid(trip_id)?;
	let res = coll
		.delete_one(doc! { "_id": oid })
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	Ok(res.deleted_count)
}

pub(crate) async fn distinct_values(
	coll: &Collection<Document>,
	filter: TripFilter,
) -> ClResult<Vec<serde_json::Value>> {
	let values = coll
		.distinct(filter.field(), doc! {})
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	Ok(flatten_distinct(values.into_iter().map(Into::into).collect()))
}


// vim: ts=4
