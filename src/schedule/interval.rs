//! Weekly recurring time windows and day-of-week sets.

use bitflags::bitflags;
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

bitflags! {
    /// Days of the week a recurring window applies to.
    ///
    /// Serializes as the set flag names (`"MONDAY | TUESDAY"`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct DaySet: u8 {
        const MONDAY = 1 << 0;
        const TUESDAY = 1 << 1;
        const WEDNESDAY = 1 << 2;
        const THURSDAY = 1 << 3;
        const FRIDAY = 1 << 4;
        const SATURDAY = 1 << 5;
        const SUNDAY = 1 << 6;

        const WEEKDAYS = Self::MONDAY.bits()
            | Self::TUESDAY.bits()
            | Self::WEDNESDAY.bits()
            | Self::THURSDAY.bits()
            | Self::FRIDAY.bits();
        const WEEKENDS = Self::SATURDAY.bits() | Self::SUNDAY.bits();
        const EVERY_DAY = Self::WEEKDAYS.bits() | Self::WEEKENDS.bits();
    }
}

impl From<Weekday> for DaySet {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => DaySet::MONDAY,
            Weekday::Tue => DaySet::TUESDAY,
            Weekday::Wed => DaySet::WEDNESDAY,
            Weekday::Thu => DaySet::THURSDAY,
            Weekday::Fri => DaySet::FRIDAY,
            Weekday::Sat => DaySet::SATURDAY,
            Weekday::Sun => DaySet::SUNDAY,
        }
    }
}

/// A half-open `[start, end)` wall-clock window repeating weekly on `days`.
///
/// Windows never span midnight; an overnight range is modeled as two
/// windows on adjacent days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub days: DaySet,
}

impl RecurringWindow {
    /// Build a window from hour/minute pairs.
    ///
    /// Panics when the range is empty or inverted; windows are declared in
    /// compiled-in tables, so a bad range is a programming error caught at
    /// startup (and by the table tests), not a runtime input.
    pub fn new(start: (u32, u32), end: (u32, u32), days: DaySet) -> Self {
        let start = NaiveTime::from_hms_opt(start.0, start.1, 0)
            .unwrap_or_else(|| panic!("invalid window start {start:?}"));
        let end = NaiveTime::from_hms_opt(end.0, end.1, 0)
            .unwrap_or_else(|| panic!("invalid window end {end:?}"));
        assert!(start < end, "window start must precede end");
        Self { start, end, days }
    }

    /// Whether this window recurs on the given weekday.
    pub fn applies_on(&self, day: Weekday) -> bool {
        self.days.contains(DaySet::from(day))
    }

    /// Half-open containment: `start <= time < end`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn containment_is_half_open() {
        let window = RecurringWindow::new((6, 0), (22, 0), DaySet::WEEKDAYS);
        assert!(window.contains(at(6, 0)));
        assert!(window.contains(at(21, 59)));
        assert!(!window.contains(at(22, 0)));
        assert!(!window.contains(at(5, 59)));
    }

    #[test]
    fn day_membership_uses_full_sets() {
        let window = RecurringWindow::new((9, 0), (18, 0), DaySet::WEEKENDS);
        assert!(window.applies_on(Weekday::Sat));
        assert!(window.applies_on(Weekday::Sun));
        assert!(!window.applies_on(Weekday::Wed));
    }

    #[test]
    fn every_day_covers_all_seven() {
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert!(DaySet::EVERY_DAY.contains(DaySet::from(day)));
        }
    }

    #[test]
    #[should_panic(expected = "start must precede end")]
    fn inverted_window_is_rejected() {
        RecurringWindow::new((22, 0), (6, 0), DaySet::EVERY_DAY);
    }
}
