use chrono::{DateTime, Datelike, TimeZone, Timelike};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MomentError {
    #[error("Day of week out of range: {0}")]
    DayOfWeek(u8),

    #[error("Hour out of range: {0}")]
    Hour(u8),

    #[error("Minute out of range: {0}")]
    Minute(u8),
}

/// A point in time reduced to what the schedule cares about.
///
/// `day_of_week` counts from Sunday (0) to Saturday (6).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Moment {
    day_of_week: u8,
    hour: u8,
    minute: u8,
}

impl Moment {
    pub fn new(day_of_week: u8, hour: u8, minute: u8) -> Result<Self, MomentError> {
        if day_of_week > 6 {
            return Err(MomentError::DayOfWeek(day_of_week));
        }
        if hour > 23 {
            return Err(MomentError::Hour(hour));
        }
        if minute > 59 {
            return Err(MomentError::Minute(minute));
        }
        Ok(Self {
            day_of_week,
            hour,
            minute,
        })
    }

    /// Reads the wall-clock fields of `datetime` in its own timezone.
    pub fn from_datetime<Z: TimeZone>(datetime: &DateTime<Z>) -> Self {
        // chrono keeps these in range, leap seconds only touch `second()`
        Self {
            day_of_week: datetime.weekday().num_days_from_sunday() as u8,
            hour: datetime.hour() as u8,
            minute: datetime.minute() as u8,
        }
    }

    pub fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn total_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use chrono_tz::America::Argentina::Buenos_Aires;

    use super::*;

    #[test]
    fn rejects_out_of_range_fields() {
        assert_eq!(Moment::new(7, 0, 0), Err(MomentError::DayOfWeek(7)));
        assert_eq!(Moment::new(0, 24, 0), Err(MomentError::Hour(24)));
        assert_eq!(Moment::new(0, 0, 60), Err(MomentError::Minute(60)));
    }

    #[test]
    fn total_minutes() {
        let moment = Moment::new(3, 19, 0).unwrap();
        assert_eq!(moment.total_minutes(), 1140);
        let moment = Moment::new(3, 23, 59).unwrap();
        assert_eq!(moment.total_minutes(), 1439);
    }

    #[test]
    fn reads_local_fields_of_zoned_datetime() {
        // 2024-06-02 is a Sunday; 13:30 UTC is 10:30 in Buenos Aires
        let utc = NaiveDate::from_ymd_opt(2024, 6, 2)
            .unwrap()
            .and_hms_opt(13, 30, 0)
            .unwrap()
            .and_utc();
        let moment = Moment::from_datetime(&utc.with_timezone(&Buenos_Aires));
        assert_eq!(moment.day_of_week(), 0);
        assert_eq!(moment.hour(), 10);
        assert_eq!(moment.minute(), 30);
    }

    #[test]
    fn day_rolls_back_across_midnight() {
        // Monday 01:00 UTC is still Sunday evening in Buenos Aires
        let utc = NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(1, 0, 0)
            .unwrap()
            .and_utc();
        let moment = Moment::from_datetime(&utc.with_timezone(&Buenos_Aires));
        assert_eq!(moment.day_of_week(), 0);
        assert_eq!(moment.hour(), 22);
    }
}
