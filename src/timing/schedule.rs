use serde::Serialize;

use super::{
    moment::Moment,
    window::{DayKind, ScheduleWindow},
};

/// Whether the store is open at a given moment, recomputed on every evaluation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StoreStatus {
    pub is_open: bool,
    pub is_sunday: bool,
}

pub fn evaluate(moment: Moment) -> StoreStatus {
    let day_kind = DayKind::from_day_of_week(moment.day_of_week());
    let window = ScheduleWindow::for_day(day_kind);
    StoreStatus {
        is_open: window.contains(moment.total_minutes()),
        is_sunday: day_kind == DayKind::Sunday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONDAY: u8 = 1;
    const SUNDAY: u8 = 0;

    fn at(day: u8, hour: u8, minute: u8) -> StoreStatus {
        evaluate(Moment::new(day, hour, minute).unwrap())
    }

    fn every_minute() -> impl Iterator<Item = (u8, u8)> {
        (0..24u8).flat_map(|hour| (0..60u8).map(move |minute| (hour, minute)))
    }

    #[test]
    fn regular_days_open_from_nine_to_seven() {
        for day in 1..=6 {
            for (hour, minute) in every_minute() {
                let total = hour as u16 * 60 + minute as u16;
                let status = at(day, hour, minute);
                assert_eq!(status.is_open, (540..1140).contains(&total), "{day} {hour}:{minute}");
                assert!(!status.is_sunday);
            }
        }
    }

    #[test]
    fn sunday_opens_from_ten_to_two() {
        for (hour, minute) in every_minute() {
            let total = hour as u16 * 60 + minute as u16;
            let status = at(SUNDAY, hour, minute);
            assert_eq!(status.is_open, (600..840).contains(&total), "{hour}:{minute}");
            assert!(status.is_sunday);
        }
    }

    #[test]
    fn boundaries() {
        assert!(!at(MONDAY, 8, 59).is_open);
        assert!(at(MONDAY, 9, 0).is_open);
        assert!(at(MONDAY, 18, 59).is_open);
        assert!(!at(MONDAY, 19, 0).is_open);
        assert!(!at(SUNDAY, 9, 59).is_open);
        assert!(at(SUNDAY, 10, 0).is_open);
        assert!(!at(SUNDAY, 14, 0).is_open);
    }

    #[test]
    fn literal_scenarios() {
        let cases = [
            (MONDAY, 9, 0, true, false),
            (MONDAY, 19, 0, false, false),
            (SUNDAY, 10, 0, true, true),
            (SUNDAY, 14, 0, false, true),
            (SUNDAY, 9, 59, false, true),
        ];
        for (day, hour, minute, is_open, is_sunday) in cases {
            assert_eq!(at(day, hour, minute), StoreStatus { is_open, is_sunday });
        }
    }

    #[test]
    fn evaluation_is_repeatable() {
        let moment = Moment::new(4, 12, 30).unwrap();
        assert_eq!(evaluate(moment), evaluate(moment));
    }
}
