//! Spreadsheet-webhook relay subsystem.

pub mod handler;

// vim: ts=4
