//! Shared BSON plumbing for the MongoDB adapter.

use mongodb::bson::{self, Bson, Document, oid::ObjectId};
use serde::Serialize;

use traveltrail::prelude::*;

/// Log database errors
pub(crate) fn inspect(err: &mongodb::error::Error) {
	warn!("DB: {:#?}", err);
}

/// Parse a store-native identifier. Malformed ids fail the operation here,
/// before any query runs.
pub(crate) fn parse_oid(id: &str) -> ClResult<ObjectId> {
	ObjectId::parse_str(id)
		.map_err(|_| Error::ValidationError(format!("Invalid document id: {}", id)))
}

/// Pull the store `_id` out of a document as a hex string, leaving the rest
/// ready for typed deserialization.
pub(crate) fn take_id(doc: &mut Document) -> Option<Box<str>> {
	match doc.remove("_id") {
		Some(Bson::ObjectId(oid)) => Some(oid.to_hex().into()),
		Some(Bson::String(s)) => Some(s.into()),
		_ => None,
	}
}

/// Serialize a domain value for insertion. The identifier field never goes
/// in; the store generates it.
pub(crate) fn to_insert_doc<T: Serialize>(value: &T) -> ClResult<Document> {
	let mut doc = bson::to_document(value).map_err(|err| {
		warn!("BSON encode: {}", err);
		Error::DbError
	})?;
	doc.remove("_id");
	Ok(doc)
}

pub(crate) fn patch_to_doc(patch: &Patch) -> ClResult<Document> {
	bson::to_document(patch).map_err(|err| {
		warn!("BSON encode: {}", err);
		Error::DbError
	})
}

pub(crate) fn inserted_id(res: mongodb::results::InsertOneResult) -> ClResult<Box<str>> {
	match res.inserted_id {
		Bson::ObjectId(oid) => Ok(oid.to_hex().into()),
		other => {
			warn!("unexpected inserted_id type: {:?}", other);
			Err(Error::DbError)
		}
	}
}


// vim: ts=4
