//! Campus-local time handling.
//!
//! Every schedule on campus is written in local wall-clock time, so all
//! calendar math (day-of-week, phase boundaries) happens in [`CAMPUS_TZ`].
//! Resolvers never read the wall clock themselves; "now" is always passed
//! in, and only the web layer defaults it to [`campus_now`].

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// The single timezone every campus schedule is written against.
pub const CAMPUS_TZ: Tz = chrono_tz::America::New_York;

/// The current instant in campus-local time.
pub fn campus_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&CAMPUS_TZ)
}

/// Convert a UTC instant into campus-local time.
pub fn to_campus(instant: DateTime<Utc>) -> DateTime<Tz> {
    instant.with_timezone(&CAMPUS_TZ)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn utc_converts_to_campus_wall_clock() {
        // 2024-11-04 is past the DST changeover, so the offset is -05:00.
        let instant = Utc.with_ymd_and_hms(2024, 11, 4, 17, 30, 0).unwrap();
        let local = to_campus(instant);
        assert_eq!(local.hour(), 12);
        assert_eq!(local.minute(), 30);
    }

    #[test]
    fn day_boundary_follows_campus_calendar_not_utc() {
        // 3am UTC is still the previous evening on campus.
        let instant = Utc.with_ymd_and_hms(2024, 11, 5, 3, 0, 0).unwrap();
        let local = to_campus(instant);
        assert_eq!(local.date_naive().to_string(), "2024-11-04");
    }
}
