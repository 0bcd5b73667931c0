//! TravelTrail CMS backend.
//!
//! A thin HTTP glue layer over a schemaless document store:
//!
//!	- admin login issuing short-lived signed tokens
//!	- CMS pages (read, upsert by semantic key)
//!	- trip and accommodation listings (full CRUD + distinct filter values)
//!	- a pass-through relay to an external spreadsheet webhook
//!
//! The store itself sits behind the [`store_adapter::StoreAdapter`] trait;
//! see the `traveltrail-store-adapter-mongodb` crate for the MongoDB
//! implementation.

#![forbid(unsafe_code)]

pub mod error;
pub mod core;
pub mod auth;
pub mod cms;
pub mod trip;
pub mod accommodation;
pub mod sheets;
pub mod store_adapter;
pub mod prelude;
pub mod types;
pub mod routes;

pub use crate::core::app::{App, AppBuilder};
pub use crate::core::config::Config;

// vim: ts=4
