//! Route table. All create/update/delete operations sit behind the admin
//! auth middleware; reads and the webhook relay are public.

use axum::{
	Router,
	http::{HeaderValue, Method, header},
	middleware,
	routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::core::middleware::require_auth;
use crate::prelude::*;
use crate::{accommodation, auth, cms, sheets, trip};

pub fn init(app: App) -> ClResult<Router> {
	let protected = Router::new()
		.route("/api/admin/check-auth", get(auth::handler::get_check_auth))
		.route("/api/cms/pages/{page_key}", put(cms::handler::put_page))
		.route("/api/trips", post(trip::handler::post_trip))
		.route(
			"/api/trips/{trip_id}",
			put(trip::handler::put_trip).delete(trip::handler::delete_trip),
		)
		.route("/api/accommodations", post(accommodation::handler::post_accommodation))
		.route(
			"/api/accommodations/{accommodation_id}",
			put(accommodation::handler::put_accommodation)
				.delete(accommodation::handler::delete_accommodation),
		)
		.layer(middleware::from_fn_with_state(app.clone(), require_auth));

	let public = Router::new()
		.route("/api/admin/login", post(auth::handler::post_login))
		.route("/api/cms/pages/{page_key}", get(cms::handler::get_page))
		.route("/api/trips", get(trip::handler::list_trips))
		.route("/api/trips/filters/{filter}", get(trip::handler::get_filter_values))
		.route("/api/trips/{trip_id}", get(trip::handler::get_trip))
		.route("/api/accommodations", get(accommodation::handler::list_accommodations))
		.route(
			"/api/accommodations/filters/{filter}",
			get(accommodation::handler::get_filter_values),
		)
		.route(
			"/api/accommodations/{accommodation_id}",
			get(accommodation::handler::get_accommodation),
		)
		.route("/api/sheets-proxy", post(sheets::handler::post_sheets_proxy));

	let origin = app
		.config
		.allowed_origin
		.parse::<HeaderValue>()
		.map_err(|_| Error::ConfigError("allowed origin is not a valid header value"))?;
	let cors = CorsLayer::new()
		.allow_origin(origin)
		.allow_credentials(true)
		.allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
		.allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE]);

	Ok(Router::new()
		.merge(public)
		.merge(protected)
		.layer(TraceLayer::new_for_http())
		.layer(cors)
		.with_state(app))
}

// vim: ts=4
