//! Declarative input validation.
//!
//! Each resource declares its field table once; validation walks the table
//! and reports EVERY violation, not just the first, so a client can fix a
//! form in one round trip.

use serde_json::{Map, Value};

use crate::error::{ClResult, Error};

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
	/// Non-blank string.
	Str,
	/// Any JSON number.
	Number,
	/// Integer-valued JSON number.
	Int,
	Array,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
	pub name: &'static str,
	pub kind: FieldKind,
}

impl FieldSpec {
	pub const fn new(name: &'static str, kind: FieldKind) -> Self {
		FieldSpec { name, kind }
	}
}

fn check_field(obj: &Map<String, Value>, spec: &FieldSpec, errors: &mut Vec<String>) {
	let value = match obj.get(spec.name) {
		None | Some(Value::Null) => {
			errors.push(format!("Missing {}", spec.name));
			return;
		}
		Some(value) => value,
	};

	match spec.kind {
		FieldKind::Str => match value.as_str() {
			Some(s) if !s.trim().is_empty() => {}
			Some(_) => errors.push(format!("Missing {}", spec.name)),
			None => errors.push(format!("{} must be a string", spec.name)),
		},
		FieldKind::Number => {
			if !value.is_number() {
				errors.push(format!("{} must be a number", spec.name));
			}
		}
		FieldKind::Int => {
			if value.as_i64().is_none() {
				errors.push(format!("{} must be an integer", spec.name));
			}
		}
		FieldKind::Array => {
			if !value.is_array() {
				errors.push(format!("{} must be an array", spec.name));
			}
		}
	}
}

/// Validate a JSON object against a field table. Returns
/// `Error::ValidationError` carrying the full comma-joined violation list.
pub fn validate_fields(obj: &Map<String, Value>, specs: &[FieldSpec]) -> ClResult<()> {
	let mut errors = Vec::new();
	for spec in specs {
		check_field(obj, spec, &mut errors);
	}
	if errors.is_empty() {
		Ok(())
	} else {
		Err(Error::ValidationError(errors.join(", ")))
	}
}

/// Require the request body to be a JSON object and hand back its map.
pub fn require_object(body: Value) -> ClResult<Map<String, Value>> {
	match body {
		Value::Object(obj) => Ok(obj),
		_ => Err(Error::ValidationError("Request body must be a JSON object".into())),
	}
}


// vim: ts=4
