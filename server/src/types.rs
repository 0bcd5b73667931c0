//! Common types used throughout the TravelTrail backend.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// A full-document patch: the client-supplied JSON object applied to an
/// existing document, identifiers already stripped.
pub type Patch = serde_json::Map<String, serde_json::Value>;

// Timestamp //
//***********//
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub i64);

impl Timestamp {
	pub fn now() -> Self {
		let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
		Timestamp(res.as_secs() as i64)
	}

	pub fn from_now(secs: i64) -> Self {
		Timestamp(Self::now().0 + secs)
	}
}

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}

/// Plain `{message}` response body shared by the CMS/trip/accommodation
/// mutation endpoints.
#[derive(Debug, Serialize)]
pub struct MessageRes {
	pub message: &'static str,
}


// vim: ts=4
