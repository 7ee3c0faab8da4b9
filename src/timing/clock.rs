use chrono::{DateTime, Datelike, Local, Timelike, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use super::moment::{Moment, MomentError};

/// The store's reference timezone. Not configurable.
pub const STORE_TIMEZONE: &str = "America/Argentina/Buenos_Aires";

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Unknown timezone '{zone}': {reason}")]
    UnknownZone { zone: String, reason: String },

    #[error("Converted time is invalid: {0}")]
    InvalidMoment(#[from] MomentError),
}

pub trait Clock: Send + Sync {
    fn now(&self) -> Moment;
}

/// Reads the current time in a named timezone, falling back to the host's
/// local time when the zone can't be resolved.
pub struct ZonedClock {
    zone: String,
}

impl ZonedClock {
    pub fn new() -> Self {
        Self::with_zone(STORE_TIMEZONE)
    }

    pub fn with_zone(zone: &str) -> Self {
        Self {
            zone: zone.to_string(),
        }
    }

    fn zoned_now(&self, instant: DateTime<Utc>) -> Result<Moment, ConversionError> {
        let timezone = self
            .zone
            .parse::<Tz>()
            .map_err(|err| ConversionError::UnknownZone {
                zone: self.zone.clone(),
                reason: err.to_string(),
            })?;
        let zoned = instant.with_timezone(&timezone);
        let moment = Moment::new(
            zoned.weekday().num_days_from_sunday() as u8,
            zoned.hour() as u8,
            zoned.minute() as u8,
        )?;
        Ok(moment)
    }
}

impl Default for ZonedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ZonedClock {
    fn now(&self) -> Moment {
        let instant = Utc::now();
        or_local_time(self.zoned_now(instant), instant)
    }
}

/// Never fails: a conversion error is swallowed and the host's local reading
/// of the same instant is used instead.
pub fn or_local_time(result: Result<Moment, ConversionError>, instant: DateTime<Utc>) -> Moment {
    result.unwrap_or_else(|_| Moment::from_datetime(&instant.with_timezone(&Local)))
}

/// Always reports the same moment.
#[cfg(test)]
pub struct FixedClock {
    moment: Moment,
}

#[cfg(test)]
impl FixedClock {
    pub fn new(moment: Moment) -> Self {
        Self { moment }
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> Moment {
        self.moment
    }
}
