//! Human-readable duration strings for "closes in" / "starts in" copy.

use chrono::Duration;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
/// Mean Gregorian month (30.4368 days). The occupancy and signage feeds
/// both render durations against this constant, so it stays.
const MS_PER_MONTH: i64 = 2_629_742_400;
const MS_PER_YEAR: i64 = 12 * MS_PER_MONTH;

/// Format a delta as its non-zero units, largest first (`"2h, 15m"`).
///
/// `top` caps how many units are emitted; live views pass 2 or 3 so a
/// countdown reads `"2h, 15m"` rather than dragging a seconds tail along.
/// Zero units in the middle are skipped entirely (`"1h, 30s"`), and a zero
/// or negative delta renders as `"0s"`.
pub fn fmt_delta(delta: Duration, top: Option<usize>) -> String {
    let ms = delta.num_milliseconds().max(0);

    let years = ms / MS_PER_YEAR;
    let months = (ms % MS_PER_YEAR) / MS_PER_MONTH;
    let days = (ms % MS_PER_MONTH) / MS_PER_DAY;
    let hours = (ms % MS_PER_DAY) / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;

    let mut parts: Vec<String> = [
        (years, "y"),
        (months, "mo"),
        (days, "d"),
        (hours, "h"),
        (minutes, "m"),
    ]
    .iter()
    .filter(|(value, _)| *value != 0)
    .map(|(value, unit)| format!("{value}{unit}"))
    .collect();

    // Seconds only appear alongside larger units when non-zero; an all-zero
    // delta still needs the "0s" floor.
    if seconds != 0 || parts.is_empty() {
        parts.push(format!("{seconds}s"));
    }

    if let Some(top) = top {
        parts.truncate(top);
    }

    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_and_minutes() {
        let delta = Duration::hours(2) + Duration::minutes(15);
        assert_eq!(fmt_delta(delta, None), "2h, 15m");
    }

    #[test]
    fn skips_zero_units_in_the_middle() {
        let delta = Duration::hours(1) + Duration::seconds(30);
        assert_eq!(fmt_delta(delta, None), "1h, 30s");
    }

    #[test]
    fn omits_trailing_zero_seconds() {
        let delta = Duration::hours(2) + Duration::minutes(15);
        assert!(!fmt_delta(delta, None).contains('s'));
    }

    #[test]
    fn top_caps_emitted_units() {
        let delta = Duration::days(1) + Duration::hours(3) + Duration::minutes(20) + Duration::seconds(5);
        assert_eq!(fmt_delta(delta, Some(2)), "1d, 3h");
        assert_eq!(fmt_delta(delta, Some(3)), "1d, 3h, 20m");
        assert_eq!(fmt_delta(delta, None), "1d, 3h, 20m, 5s");
    }

    #[test]
    fn zero_and_negative_render_as_zero_seconds() {
        assert_eq!(fmt_delta(Duration::zero(), None), "0s");
        assert_eq!(fmt_delta(Duration::seconds(-30), Some(3)), "0s");
    }

    #[test]
    fn sub_minute_renders_seconds_alone() {
        assert_eq!(fmt_delta(Duration::seconds(42), Some(2)), "42s");
    }

    #[test]
    fn multi_day_uses_mean_month_boundary() {
        // 35 days rolls over into 1mo, 4d under the mean-month constant.
        let delta = Duration::days(35);
        assert_eq!(fmt_delta(delta, Some(2)), "1mo, 4d");
    }
}
