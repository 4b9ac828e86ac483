//! Historical-average occupancy lookups keyed by 15-minute slot labels.

use chrono::{DateTime, Timelike};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One historical-average sample from the occupancy feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OccupantRecord {
    /// Slot label as the feed renders it, e.g. `"3:15 PM"`.
    pub time: String,
    pub count: u32,
}

/// Render a campus-local instant as the feed's slot label.
///
/// Minutes floor to the previous 15-minute boundary (3:29 belongs to the
/// 3:15 slot) and are always two digits. The hour is 12-hour clock in the
/// feed's own rendering, which writes the zero hour as `0` rather than 12.
/// Both halves must match the feed byte-for-byte or lookups silently miss.
pub fn slot_label(now: DateTime<Tz>) -> String {
    let hour = now.hour();
    let slot = now.minute() / 15 * 15;
    let display_hour = if hour % 12 == 0 { hour } else { hour % 12 };
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    format!("{display_hour}:{slot:02} {meridiem}")
}

/// Look up the historical average for the slot containing `now`.
///
/// A label with no matching record returns `None`; the feed publishes
/// nothing for slots the building was closed, and callers render "no data".
pub fn typical_for_timeslot<'a>(
    averages: &'a [OccupantRecord],
    now: DateTime<Tz>,
) -> Option<&'a OccupantRecord> {
    let label = slot_label(now);
    averages.iter().find(|record| record.time == label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::CAMPUS_TZ;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Tz> {
        CAMPUS_TZ
            .with_ymd_and_hms(2024, 11, 4, hour, minute, 0)
            .unwrap()
    }

    fn record(time: &str, count: u32) -> OccupantRecord {
        OccupantRecord {
            time: time.to_owned(),
            count,
        }
    }

    #[test]
    fn label_floors_to_previous_quarter_hour() {
        assert_eq!(slot_label(at(15, 15)), "3:15 PM");
        assert_eq!(slot_label(at(15, 29)), "3:15 PM");
        assert_eq!(slot_label(at(15, 44)), "3:30 PM");
        assert_eq!(slot_label(at(15, 0)), "3:00 PM");
    }

    #[test]
    fn label_keeps_two_digit_minutes() {
        assert_eq!(slot_label(at(9, 7)), "9:00 AM");
    }

    #[test]
    fn noon_and_midnight_follow_the_feed_rendering() {
        assert_eq!(slot_label(at(12, 20)), "12:15 PM");
        // The feed writes the midnight hour as 0, not 12.
        assert_eq!(slot_label(at(0, 10)), "0:00 AM");
    }

    #[test]
    fn lookup_matches_the_slot_containing_now() {
        let averages = vec![record("3:00 PM", 80), record("3:15 PM", 95)];
        let hit = typical_for_timeslot(&averages, at(15, 20)).unwrap();
        assert_eq!(hit.count, 95);
    }

    #[test]
    fn missing_slot_returns_none() {
        let averages = vec![record("3:00 PM", 80)];
        assert!(typical_for_timeslot(&averages, at(4, 0)).is_none());
    }

    #[test]
    fn empty_averages_return_none() {
        assert!(typical_for_timeslot(&[], at(15, 0)).is_none());
    }
}
