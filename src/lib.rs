//! Charge engine for overnight babysitting shifts.
//!
//! This crate validates a shift against the legal start and end window and
//! prices it at three fixed hourly rates: start to bedtime, bedtime to
//! midnight, and midnight to the end. Partial hours at the end are billed
//! in full, and hour counts follow elapsed time across daylight-saving
//! transitions.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
