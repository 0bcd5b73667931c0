use axum::{
	Json,
	extract::{Path, State},
};
use serde_json::Value;

use crate::core::validate::{FieldKind, FieldSpec, require_object, validate_fields};
use crate::prelude::*;
use crate::store_adapter::{CmsPage, CmsPageData};
use crate::types::MessageRes;

const PAGE_NOT_FOUND: &str = "Page content not found.";

const PAGE_FIELDS: &[FieldSpec] =
	&[FieldSpec::new("title", FieldKind::Str), FieldSpec::new("content", FieldKind::Str)];

/// # GET /api/cms/pages/{pageKey}
pub async fn get_page(
	State(app): State<App>,
	Path(page_key): Path<String>,
) -> ClResult<Json<CmsPage>> {
	let page =
		app.store.read_cms_page(&page_key).await?.ok_or(Error::NotFound(PAGE_NOT_FOUND))?;
	Ok(Json(page))
}

/// # PUT /api/cms/pages/{pageKey}
/// Update-or-insert: an unknown key creates the page, since pages are
/// provisioned lazily by the admin frontend.
pub async fn put_page(
	State(app): State<App>,
	Path(page_key): Path<String>,
	Json(body): Json<Value>,
) -> ClResult<Json<MessageRes>> {
	let body = require_object(body)?;
	validate_fields(&body, PAGE_FIELDS)?;

	let data = CmsPageData {
		title: body.get("title").and_then(|v| v.as_str()).unwrap_or_default().into(),
		content: body.get("content").and_then(|v| v.as_str()).unwrap_or_default().into(),
	};
	app.store.upsert_cms_page(&page_key, &data).await?;
	info!("CMS page {} updated", page_key);

	Ok(Json(MessageRes { message: "Page content updated successfully." }))
}

// vim: ts=4
