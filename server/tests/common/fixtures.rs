//! Reusable request bodies for the integration tests.

use serde_json::{Value, json};

/// A trip create body the way the admin form submits it: numbers and the
/// availability flag arrive as strings.
pub fn form_style_trip() -> Value {
	json!({
		"name": "Goa Getaway",
		"desc": "Four days on the coast",
		"price": "25000",
		"daysCount": "4",
		"nightsCount": "3",
		"category": "beach",
		"theme": "relaxed",
		"themes": ["beach", "nightlife"],
		"inclusions": ["breakfast", "airport pickup"],
		"exclusions": ["flights"],
		"images": ["goa-1.jpg"],
		"itineraries": [{ "day": 1, "plan": "arrive and relax" }],
		"availability": "true",
		"tripExpert": "Asha",
		"destination": "Goa"
	})
}

/// A trip create body from a well-behaved JSON client.
pub fn json_trip(name: &str, destination: &str, themes: Value) -> Value {
	json!({
		"name": name,
		"desc": "desc",
		"price": 18000,
		"daysCount": 5,
		"nightsCount": 4,
		"themes": themes,
		"inclusions": ["breakfast"],
		"exclusions": [],
		"images": [],
		"itineraries": [],
		"availability": true,
		"destination": destination
	})
}

pub fn accommodation_body() -> Value {
	json!({
		"name": "Sea View Suite",
		"price": 7800.0,
		"roomType": "Suite",
		"bedType": "King",
		"maxOccupancy": 3,
		"size": "42sqm",
		"overview": "Top floor, private balcony",
		"images": ["suite-1.jpg"],
		"themes": ["romantic"],
		"amenities": ["wifi", "pool"],
		"destination": "Goa"
	})
}
