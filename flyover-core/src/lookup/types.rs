///! Data types shared across the lookup chain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic position resolved from the caller's public IP
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One predicted overhead pass, as reported by the prediction service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassTime {
    /// Rise time, seconds since the Unix epoch
    pub risetime: i64,
    /// Length of the visibility window in seconds
    pub duration: u32,
}

impl PassTime {
    /// Rise time as a UTC datetime (None if the epoch value is out of
    /// chrono's representable range)
    pub fn rise_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.risetime, 0)
    }
}
