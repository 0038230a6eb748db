//! Work hours and pay analyzer
//!
//! This crate analyzes a flat collection of daily work records against a
//! twelve-period calendar: it computes hours and pay metrics for a period's
//! primary range, overtime and night-shift premiums over its premium range,
//! and merges edited records back into the stored collection.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
