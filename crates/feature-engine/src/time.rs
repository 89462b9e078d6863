//! Temporal One-Hot Feature
//!
//! Encodes posting time as a 23-length hour indicator followed by a
//! 6-length weekday indicator. Both use n-1 one-hot encoding: hour 0 and
//! Monday are the all-zero anchors, so a vector of n-1 positions covers n
//! values without the redundant all-zero-vs-one-hot ambiguity.

use crate::error::FeatureError;
use chrono::{Datelike, Local, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Width of the hour sub-vector (hours 1-23; hour 0 is all zeros)
pub const HOUR_WIDTH: usize = 23;
/// Width of the weekday sub-vector (Tue-Sun; Monday is all zeros)
pub const WEEKDAY_WIDTH: usize = 6;
/// Total width of the temporal block
pub const TIME_WIDTH: usize = HOUR_WIDTH + WEEKDAY_WIDTH;

/// Time zone used to derive civil hour and weekday from a Unix timestamp.
///
/// The same epoch value produces different one-hot vectors under different
/// zones, so the zone is explicit configuration rather than an ambient
/// assumption. `Local` matches the original pipeline's behavior; `Utc`
/// gives machine-independent, reproducible vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeBasis {
    #[default]
    Local,
    Utc,
}

/// Encode a Unix timestamp (seconds, fractional allowed) as the temporal
/// one-hot block. The timestamp is truncated to whole seconds first.
pub fn encode(unixtime: f64, basis: TimeBasis) -> Result<Vec<f64>, FeatureError> {
    if !unixtime.is_finite() {
        return Err(FeatureError::InvalidTimestamp(unixtime));
    }
    let secs = unixtime.trunc() as i64;

    let (hour, weekday) = match basis {
        TimeBasis::Local => {
            let dt = Local
                .timestamp_opt(secs, 0)
                .single()
                .ok_or(FeatureError::InvalidTimestamp(unixtime))?;
            (dt.hour(), dt.weekday().num_days_from_monday())
        }
        TimeBasis::Utc => {
            let dt = Utc
                .timestamp_opt(secs, 0)
                .single()
                .ok_or(FeatureError::InvalidTimestamp(unixtime))?;
            (dt.hour(), dt.weekday().num_days_from_monday())
        }
    };

    from_parts(hour, weekday)
}

/// Encode an (hour, weekday) pair directly. Weekday 0 is Monday.
///
/// Ranges are validated explicitly: an out-of-range value is a usage error,
/// never an out-of-bounds index.
pub fn from_parts(hour: u32, weekday: u32) -> Result<Vec<f64>, FeatureError> {
    if hour > 23 {
        return Err(FeatureError::HourOutOfRange(hour));
    }
    if weekday > 6 {
        return Err(FeatureError::WeekdayOutOfRange(weekday));
    }

    let mut encoding = vec![0.0; TIME_WIDTH];
    if hour != 0 {
        encoding[hour as usize - 1] = 1.0;
    }
    if weekday != 0 {
        encoding[HOUR_WIDTH + weekday as usize - 1] = 1.0;
    }
    Ok(encoding)
}
