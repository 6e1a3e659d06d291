//! Timesheet pay engine.
//!
//! This crate converts daily shift records (clock times, day of week and a
//! handful of flags) into pay breakdowns under a rostered-shift pay
//! structure: ordinary hours, shift penalties, weekend loading, overtime
//! shifts, the WOBOD bonus, sick pay and special loading. Fourteen days
//! sum to a fortnight.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
