//! Request types for the charge service API.
//!
//! This module defines the JSON request structure for the `/charge` endpoint.

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::config::parse_timezone;
use crate::error::EngineResult;
use crate::models::ShiftInterval;

/// Request body for the `/charge` endpoint.
///
/// Times are wall-clock times in `timezone`, or in the service's configured
/// timezone when none is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// When the shift started.
    pub start_time: NaiveDateTime,
    /// When the shift ended.
    pub end_time: NaiveDateTime,
    /// IANA name of the timezone the times are in.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl ChargeRequest {
    /// Resolves the timezone the request's times are read in.
    pub fn resolve_timezone(&self, default_tz: Tz) -> EngineResult<Tz> {
        match &self.timezone {
            Some(name) => parse_timezone(name),
            None => Ok(default_tz),
        }
    }

    /// Builds the shift interval described by this request.
    pub fn to_interval(&self, tz: Tz) -> EngineResult<ShiftInterval<Tz>> {
        ShiftInterval::from_local(&tz, self.start_time, self.end_time)
    }
}
