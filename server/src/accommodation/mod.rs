//! Accommodation subsystem.

pub mod handler;

// vim: ts=4
