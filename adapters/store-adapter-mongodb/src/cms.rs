//! CMS page collection operations. Pages are keyed by their semantic `key`
//! field, not by ObjectId.

use mongodb::{
	Collection,
	bson::{self, Document, doc},
};

use traveltrail::prelude::*;
use traveltrail::store_adapter::{CmsPage, CmsPageData};

use crate::utils::{inspect, take_id};

fn from_doc(mut doc: Document) -> ClResult<CmsPage> {
	let id = take_id(&mut doc);
	let mut page: CmsPage = bson::from_document(doc).map_err(|err| {
		warn!("BSON decode: {}", err);
		Error::DbError
	})?;
	page.id = id;
	Ok(page)
}

pub(crate) async fn read_page(coll: &Collection<Document>, key: &str) -> ClResult<Option<CmsPage>> {
	let doc = coll
		.find_one(doc! { "key": key })
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	doc.map(from_doc).transpose()
}

pub(crate) async fn upsert_page(
	coll: &Collection<Document>,
	key: &str,
	data: &CmsPageData,
) -> ClResult<()> {
	coll.update_one(
		doc! { "key": key },
		doc! { "$set": {
			"title": data.title.as_ref(),
			"content": data.content.as_ref(),
		} },
	)
	.upsert(true)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	Ok(())
}


// vim: ts=4
