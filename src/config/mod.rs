//! Configuration loading and management for the hours analyzer.
//!
//! This module provides the twelve-period calendar and the premium rules,
//! loaded once from YAML files and treated as immutable afterwards.
//!
//! # Example
//!
//! ```no_run
//! use hours_analyzer::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/pay-months-2025").unwrap();
//! println!("Loaded schedule: {}", config.schedule_name());
//! ```

mod calendar;
mod loader;
mod types;

pub use calendar::PeriodCalendar;
pub use loader::ConfigLoader;
pub use types::{PeriodEntry, PremiumRules, ScheduleConfig};
