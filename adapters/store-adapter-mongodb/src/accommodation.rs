//! Accommodation collection operations.

use futures::TryStreamExt;
use mongodb::{
	Collection,
	bson::{self, Document, doc},
};

use traveltrail::prelude::*;
use traveltrail::store_adapter::{
	Accommodation, AccommodationFilter, AccommodationSummary, UpdateOutcome, flatten_distinct,
};

use crate::utils::{inserted_id, inspect, parse_oid, patch_to_doc, take_id, to_insert_doc};

fn from_doc(mut doc: Document) -> ClResult<Accommodation> {
	let id = take_id(&mut doc);
	let mut accommodation: Accommodation = bson::from_document(doc).map_err(|err| {
		warn!("BSON decode: {}", err);
		Error::DbError
	})?;
	accommodation.id = id;
	Ok(accommodation)
}

fn summary_from_doc(mut doc: Document) -> ClResult<AccommodationSummary> {
	let id = take_id(&mut doc);
	let mut summary: AccommodationSummary = bson::from_document(doc).map_err(|err| {
		warn!("BSON decode: {}", err);
		Error::DbError
	})?;
	summary.id = id;
	Ok(summary)
}

pub(crate) async fn list_summaries(
	coll: &Collection<Document>,
) -> ClResult<Vec<AccommodationSummary>> {
	let mut cursor = coll
		.find(doc! {})
		.projection(doc! {
			"_id": 1,
			"name": 1,
			"price": 1,
			"roomType": 1,
			"maxOccupancy": 1,
			"images": 1,
		})
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	let mut summaries = Vec::new();
	while let Some(doc) =
		cursor.try_next().await.inspect_err(inspect).map_err(|_| Error::DbError)?
	{
		summaries.push(summary_from_doc(doc)?);
	}
	Ok(summaries)
}

pub(crate) async fn read(
	coll: &Collection<Document>,
	accommodation_id: &str,
) -> ClResult<Option<Accommodation>> {
	let oid = parse_oid(accommodation_id)?;
	let doc = coll
		.find_one(doc! { "_id": oid })
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	doc.map(from_doc).transpose()
}

pub(crate) async fn create(
	coll: &Collection<Document>,
	accommodation: &Accommodation,
) -> ClResult<Box<str>> {
	let doc = to_insert_doc(accommodation)?;
	let res = coll.insert_one(doc).await.inspect_err(inspect).map_err(|_| Error::DbError)?;
	inserted_id(res)
}

pub(crate) async fn update(
	coll: &Collection<Document>,
	accommodation_id: &str,
	patch: &Patch,
) -> ClResult<UpdateOutcome> {
	let oid = parse_oid(accommodation_id)?;
	let res = coll
		.update_one(doc! { "_id": oid }, doc! { "$set": patch_to_doc(patch)? })
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(UpdateOutcome { matched: res.matched_count, modified: res.modified_count })
}

pub(crate) async fn delete(
	coll: &Collection<Document>,
	accommodation_id: &str,
) -> ClResult<u64> {
	let oid = parse_oid(accommodation_id)?;
	let res = coll
		.delete_one(doc! { "_id": oid })
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	Ok(res.deleted_count)
}

pub(crate) async fn distinct_values(
	coll: &Collection<Document>,
	filter: AccommodationFilter,
) -> ClResult<Vec<serde_json::Value>> {
	let values = coll
		.distinct(filter.field(), doc! {})
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	Ok(flatten_distinct(values.into_iter().map(Into::into).collect()))
}


// vim: ts=4
