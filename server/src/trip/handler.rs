//! Trip package handlers.

use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::validate::{FieldKind, FieldSpec, require_object, validate_fields};
use crate::prelude::*;
use crate::store_adapter::{Trip, TripFilter};
use crate::types::MessageRes;

const READ_NOT_FOUND: &str = "Trip package not found.";
const WRITE_NOT_FOUND: &str = "Trip not found";

const CREATE_FIELDS: &[FieldSpec] = &[
	FieldSpec::new("name", FieldKind::Str),
	FieldSpec::new("desc", FieldKind::Str),
	FieldSpec::new("price", FieldKind::Int),
	FieldSpec::new("daysCount", FieldKind::Int),
	FieldSpec::new("nightsCount", FieldKind::Int),
	FieldSpec::new("themes", FieldKind::Array),
	FieldSpec::new("inclusions", FieldKind::Array),
	FieldSpec::new("exclusions", FieldKind::Array),
	FieldSpec::new("itineraries", FieldKind::Array),
];

// Mutating writes always need a name and a numeric price.
const UPDATE_FIELDS: &[FieldSpec] =
	&[FieldSpec::new("name", FieldKind::Str), FieldSpec::new("price", FieldKind::Number)];

/// Adapt values arriving from the form-encoded admin channel before
/// validation: numeric-looking strings become integers, the availability
/// flag becomes a real bool. JSON clients that already send proper types
/// pass through untouched.
pub(crate) fn normalize_form_input(obj: &mut Map<String, Value>) {
	for key in ["price", "daysCount", "nightsCount"] {
		let normalized = match obj.get(key) {
			Some(Value::String(s)) => {
				s.trim().parse::<f64>().ok().filter(|n| n.is_finite()).map(|n| n.trunc() as i64)
			}
			Some(Value::Number(n)) if n.as_i64().is_none() => {
				n.as_f64().map(|n| n.trunc() as i64)
			}
			_ => None,
		};
		if let Some(n) = normalized {
			obj.insert(key.to_string(), Value::from(n));
		}
	}

	if let Some(Value::String(s)) = obj.get("availability") {
		let available = s == "true";
		obj.insert("availability".to_string(), Value::Bool(available));
	}
}

/// # GET /api/trips
pub async fn list_trips(State(app): State<App>) -> ClResult<Json<Vec<Trip>>> {
	let trips = app.store.list_trips().await?;
	Ok(Json(trips))
}

/// # GET /api/trips/{tripId}
pub async fn get_trip(
	State(app): State<App>,
	Path(trip_id): Path<String>,
) -> ClResult<Json<Trip>> {
	let trip = app.store.read_trip(&trip_id).await?.ok_or(Error::NotFound(READ_NOT_FOUND))?;
	Ok(Json(trip))
}

/// # POST /api/trips
#[derive(Serialize)]
pub struct TripCreatedRes {
	message: &'static str,
	#[serde(rename = "tripId")]
	trip_id: String,
}

pub async fn post_trip(
	State(app): State<App>,
	Json(body): Json<Value>,
) -> ClResult<(StatusCode, Json<TripCreatedRes>)> {
	let mut body = require_object(body)?;
	normalize_form_input(&mut body);
	validate_fields(&body, CREATE_FIELDS)?;
	body.remove("_id");

	let trip: Trip = serde_json::from_value(Value::Object(body))
		.map_err(|err| Error::ValidationError(format!("Invalid trip data: {}", err)))?;

	let trip_id = app.store.create_trip(&trip).await?;
	info!("trip {} created", trip_id);

	Ok((
		StatusCode::CREATED,
		Json(TripCreatedRes {
			message: "Trip package added successfully!",
			trip_id: trip_id.into(),
		}),
	))
}

/// # PUT /api/trips/{tripId}
#[derive(Serialize)]
pub struct TripUpdatedRes {
	message: &'static str,
	#[serde(rename = "modifiedCount")]
	modified_count: u64,
}

pub async fn put_trip(
	State(app): State<App>,
	Path(trip_id): Path<String>,
	Json(body): Json<Value>,
) -> ClResult<Json<TripUpdatedRes>> {
	let mut body = require_object(body)?;
	// Identifiers are immutable post-creation.
	body.remove("_id");
	validate_fields(&body, UPDATE_FIELDS)?;

	let outcome = app.store.update_trip(&trip_id, &body).await?;
	if outcome.matched == 0 {
		return Err(Error::NotFound(WRITE_NOT_FOUND));
	}
	info!("trip {} updated", trip_id);

	Ok(Json(TripUpdatedRes {
		message: "Trip updated successfully",
		modified_count: outcome.modified,
	}))
}

/// # DELETE /api/trips/{tripId}
pub async fn delete_trip(
	State(app): State<App>,
	Path(trip_id): Path<String>,
) -> ClResult<Json<MessageRes>> {
	let deleted = app.store.delete_trip(&trip_id).await?;
	if deleted == 0 {
		return Err(Error::NotFound(WRITE_NOT_FOUND));
	}
	info!("trip {} deleted", trip_id);

	Ok(Json(MessageRes { message: "Trip deleted successfully" }))
}

/// # GET /api/trips/filters/{filter}
pub async fn get_filter_values(
	State(app): State<App>,
	Path(filter): Path<String>,
) -> ClResult<Json<Vec<Value>>> {
	let filter = TripFilter::from_param(&filter).ok_or(Error::NotFound("Unknown trip filter"))?;
	let values = app.store.distinct_trip_values(filter).await?;
	Ok(Json(values))
}


// vim: ts=4
