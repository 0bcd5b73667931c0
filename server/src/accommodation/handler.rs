//! Accommodation handlers.

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use serde::Serialize;
use serde_json::Value;

use crate::core::validate::{FieldKind, FieldSpec, require_object, validate_fields};
use crate::prelude::*;
use crate::store_adapter::{Accommodation, AccommodationFilter, AccommodationSummary};

const READ_NOT_FOUND: &str = "Accommodation package not found.";
const WRITE_NOT_FOUND: &str = "Accommodation not found";

const CREATE_FIELDS: &[FieldSpec] = &[
	FieldSpec::new("name", FieldKind::Str),
	FieldSpec::new("price", FieldKind::Number),
	FieldSpec::new("roomType", FieldKind::Str),
	FieldSpec::new("bedType", FieldKind::Str),
	FieldSpec::new("maxOccupancy", FieldKind::Int),
	FieldSpec::new("size", FieldKind::Str),
	FieldSpec::new("overview", FieldKind::Str),
	FieldSpec::new("images", FieldKind::Array),
	FieldSpec::new("themes", FieldKind::Array),
	FieldSpec::new("amenities", FieldKind::Array),
];

// Mutating writes always need a name and a numeric price.
const UPDATE_FIELDS: &[FieldSpec] =
	&[FieldSpec::new("name", FieldKind::Str), FieldSpec::new("price", FieldKind::Number)];

/// # GET /api/accommodations
/// Returns a projected field subset to keep the listing payload small.
#[derive(Serialize)]
pub struct AccommodationListRes {
	success: bool,
	data: Vec<AccommodationSummary>,
}

pub async fn list_accommodations(State(app): State<App>) -> ClResult<Json<AccommodationListRes>> {
	let data = app.store.list_accommodation_summaries().await?;
	Ok(Json(AccommodationListRes { success: true, data }))
}

/// # GET /api/accommodations/{accommodationId}
pub async fn get_accommodation(
	State(app): State<App>,
	Path(accommodation_id): Path<String>,
) -> ClResult<Json<Accommodation>> {
	let accommodation = app
		.store
		.read_accommodation(&accommodation_id)
		.await?
		.ok_or(Error::NotFound(READ_NOT_FOUND))?;
	Ok(Json(accommodation))
}

/// # POST /api/accommodations
#[derive(Serialize)]
pub struct AccommodationCreatedRes {
	success: bool,
	#[serde(rename = "insertedId")]
	inserted_id: String,
}

pub async fn post_accommodation(
	State(app): State<App>,
	Json(body): Json<Value>,
) -> ClResult<(StatusCode, Json<AccommodationCreatedRes>)> {
	let mut body = require_object(body)?;
	validate_fields(&body, CREATE_FIELDS)?;
	body.remove("_id");

	let accommodation: Accommodation = serde_json::from_value(Value::Object(body))
		.map_err(|err| Error::ValidationError(format!("Invalid accommodation data: {}", err)))?;

	let inserted_id = app.store.create_accommodation(&accommodation).await?;
	info!("accommodation {} created", inserted_id);

	Ok((
		StatusCode::CREATED,
		Json(AccommodationCreatedRes { success: true, inserted_id: inserted_id.into() }),
	))
}

/// # PUT /api/accommodations/{accommodationId}
#[derive(Serialize)]
pub struct AccommodationUpdatedRes {
	message: &'static str,
	#[serde(rename = "modifiedCount")]
	modified_count: u64,
}

pub async fn put_accommodation(
	State(app): State<App>,
	Path(accommodation_id): Path<String>,
	Json(body): Json<Value>,
) -> ClResult<Json<AccommodationUpdatedRes>> {
	let mut body = require_object(body)?;
	// Identifiers are immutable post-creation.
	body.remove("_id");
	validate_fields(&body, UPDATE_FIELDS)?;

	let outcome = app.store.update_accommodation(&accommodation_id, &body).await?;
	if outcome.matched == 0 {
		return Err(Error::NotFound(WRITE_NOT_FOUND));
	}
	info!("accommodation {} updated", accommodation_id);

	Ok(Json(AccommodationUpdatedRes {
		message: "Accommodation updated successfully",
		modified_count: outcome.modified,
	}))
}

/// # DELETE /api/accommodations/{accommodationId}
#[derive(Serialize)]
pub struct AccommodationDeletedRes {
	success: bool,
}

pub async fn delete_accommodation(
	State(app): State<App>,
	Path(accommodation_id): Path<String>,
) -> ClResult<Json<AccommodationDeletedRes>> {
	let deleted = app.store.delete_accommodation(&accommodation_id).await?;
	if deleted == 0 {
		return Err(Error::NotFound(WRITE_NOT_FOUND));
	}
	info!("accommodation {} deleted", accommodation_id);

	Ok(Json(AccommodationDeletedRes { success: true }))
}

/// # GET /api/accommodations/filters/{filter}
pub async fn get_filter_values(
	State(app): State<App>,
	Path(filter): Path<String>,
) -> ClResult<Json<Vec<Value>>> {
	let filter = AccommodationFilter::from_param(&filter)
		.ok_or(Error::NotFound("Unknown accommodation filter"))?;
	let values = app.store.distinct_accommodation_values(filter).await?;
	Ok(Json(values))
}

// vim: ts=4
