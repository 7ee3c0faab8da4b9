use serde::Serialize;

/// Classification of a day for schedule purposes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    Regular,
    Sunday,
}

impl DayKind {
    /// `day_of_week` counts from Sunday, so 0 is the only Sunday.
    pub fn from_day_of_week(day_of_week: u8) -> Self {
        if day_of_week == 0 {
            DayKind::Sunday
        } else {
            DayKind::Regular
        }
    }
}

/// Opening hours for one kind of day, in minutes since midnight.
///
/// `open_minute` is inclusive, `close_minute` is exclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScheduleWindow {
    day_kind: DayKind,
    open_minute: u16,
    close_minute: u16,
}

/// Monday to Saturday, 09:00 - 19:00.
pub const REGULAR_WINDOW: ScheduleWindow = ScheduleWindow::new(DayKind::Regular, 9 * 60, 19 * 60);

/// Sunday, 10:00 - 14:00.
pub const SUNDAY_WINDOW: ScheduleWindow = ScheduleWindow::new(DayKind::Sunday, 10 * 60, 14 * 60);

impl ScheduleWindow {
    const fn new(day_kind: DayKind, open_minute: u16, close_minute: u16) -> Self {
        assert!(open_minute < close_minute);
        Self {
            day_kind,
            open_minute,
            close_minute,
        }
    }

    pub fn for_day(day_kind: DayKind) -> &'static ScheduleWindow {
        match day_kind {
            DayKind::Regular => &REGULAR_WINDOW,
            DayKind::Sunday => &SUNDAY_WINDOW,
        }
    }

    pub fn contains(&self, total_minutes: u16) -> bool {
        self.open_minute <= total_minutes && total_minutes < self.close_minute
    }
}
