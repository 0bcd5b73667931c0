//! CMS page subsystem. Pages are a fixed known set addressed by semantic
//! key, provisioned lazily through upsert.

pub mod handler;

// vim: ts=4
