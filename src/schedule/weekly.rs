//! Recurring weekly schedules and their resolution against "now".
//!
//! A [`Schedule`] holds one or more named phases (a rec facility has a
//! single "Open" phase; a dining hall runs breakfast → lunch → dinner).
//! Resolution classifies a campus-local instant as open, between phases,
//! or closed, and finds the next opening with a search bounded to one full
//! weekly cycle.

use chrono::{DateTime, Datelike, Days, Duration, NaiveDateTime, Weekday};
use chrono_tz::Tz;
use indexmap::IndexMap;

use crate::schedule::interval::RecurringWindow;

/// Named phases mapped to their weekly windows, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    phases: IndexMap<String, Vec<RecurringWindow>>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a phase and its windows. Phases resolve in declaration
    /// order, so multi-phase domains list them in day order.
    pub fn with_phase(mut self, name: impl Into<String>, windows: Vec<RecurringWindow>) -> Self {
        self.phases.insert(name.into(), windows);
        self
    }

    pub fn phases(&self) -> impl Iterator<Item = (&str, &[RecurringWindow])> {
        self.phases
            .iter()
            .map(|(name, windows)| (name.as_str(), windows.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.phases.values().all(|windows| windows.is_empty())
    }

    /// The window for a phase on a given weekday, if one is registered.
    pub fn window_on(&self, phase: &str, day: Weekday) -> Option<&RecurringWindow> {
        self.phases
            .get(phase)?
            .iter()
            .find(|window| window.applies_on(day))
    }
}

/// Domain keys (halls, facilities) mapped to their schedules.
#[derive(Debug, Clone, Default)]
pub struct ScheduleTable {
    domains: IndexMap<String, Schedule>,
}

impl ScheduleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain(mut self, key: impl Into<String>, schedule: Schedule) -> Self {
        self.domains.insert(key.into(), schedule);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Schedule> {
        self.domains.get(key)
    }

    pub fn domains(&self) -> impl Iterator<Item = (&str, &Schedule)> {
        self.domains
            .iter()
            .map(|(key, schedule)| (key.as_str(), schedule))
    }

    /// Resolve a domain by key. An unregistered key reads as closed with no
    /// upcoming opening; callers render "unknown/closed" rather than erroring.
    pub fn resolve(&self, key: &str, now: DateTime<Tz>) -> ResolvedStatus<'_> {
        match self.domains.get(key) {
            Some(schedule) => resolve_weekly_phase(schedule, now),
            None => ResolvedStatus {
                state: DomainState::Closed,
                current: None,
                next: None,
            },
        }
    }
}

/// Domain-level state at the queried instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainState {
    /// Inside one of the domain's windows.
    Open,
    /// In a same-day gap between two distinct phases (one ended, a later
    /// one yet to begin); dining halls surface this as "between meals".
    BetweenPhases,
    /// Outside every window for today.
    Closed,
}

/// The window containing now.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentPhase<'a> {
    pub phase: &'a str,
    pub window: &'a RecurringWindow,
    /// Wall-clock time left until the window ends.
    pub remaining: Duration,
}

/// The soonest window starting after now, within one weekly cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct NextOpening<'a> {
    pub phase: &'a str,
    /// Campus-local wall-clock start of the opening.
    pub start: NaiveDateTime,
    pub until: Duration,
}

/// Everything a live view needs to render a domain's status.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStatus<'a> {
    pub state: DomainState,
    pub current: Option<CurrentPhase<'a>>,
    /// `None` means no opening exists anywhere in the 7-day cycle.
    pub next: Option<NextOpening<'a>>,
}

/// Classify a campus-local instant against a weekly schedule.
///
/// Containment is minute-granular: a 6:00 opening is closed at 5:59 and
/// open at 6:00 sharp. All arithmetic happens on the local wall clock, so
/// calendar-day boundaries follow the campus day rather than UTC.
pub fn resolve_weekly_phase(schedule: &Schedule, now: DateTime<Tz>) -> ResolvedStatus<'_> {
    let local = now.naive_local();
    let today = local.weekday();
    let time = local.time();

    let current = schedule
        .phases()
        .find_map(|(phase, windows)| {
            windows
                .iter()
                .filter(|window| window.applies_on(today))
                .find(|window| window.contains(time))
                .map(|window| (phase, window))
        })
        .map(|(phase, window)| CurrentPhase {
            phase,
            window,
            remaining: local.date().and_time(window.end) - local,
        });

    let next = next_opening(schedule, local);

    let state = if current.is_some() {
        DomainState::Open
    } else if in_same_day_gap(schedule, local) {
        DomainState::BetweenPhases
    } else {
        DomainState::Closed
    };

    ResolvedStatus { state, current, next }
}

/// Whether now falls in a gap between two *different* phases on the same
/// day. A single-phase domain with a split day (a pool closing midday) is
/// plain closed during the gap, not between phases.
fn in_same_day_gap(schedule: &Schedule, local: NaiveDateTime) -> bool {
    let today = local.weekday();
    let time = local.time();
    let mut ended: Vec<usize> = Vec::new();
    let mut upcoming: Vec<usize> = Vec::new();

    for (index, (_, windows)) in schedule.phases().enumerate() {
        for window in windows.iter().filter(|w| w.applies_on(today)) {
            if window.end <= time {
                ended.push(index);
            }
            if window.start > time {
                upcoming.push(index);
            }
        }
    }

    ended
        .iter()
        .any(|done| upcoming.iter().any(|ahead| ahead != done))
}

/// Find the earliest window starting strictly after `local`.
///
/// Scans today's remaining windows first, then walks forward one day at a
/// time. The scan covers exactly one weekly cycle (the eighth day catches a
/// window earlier today that only recurs next week) and then gives up, so an
/// empty or dayless schedule terminates with `None` instead of spinning.
fn next_opening(schedule: &Schedule, local: NaiveDateTime) -> Option<NextOpening<'_>> {
    for offset in 0..=7u64 {
        let date = local.date() + Days::new(offset);
        let day = date.weekday();

        let mut best: Option<(&str, &RecurringWindow)> = None;
        for (phase, windows) in schedule.phases() {
            for window in windows.iter().filter(|w| w.applies_on(day)) {
                if offset == 0 && window.start <= local.time() {
                    continue;
                }
                if best.is_none_or(|(_, b)| window.start < b.start) {
                    best = Some((phase, window));
                }
            }
        }

        if let Some((phase, window)) = best {
            let start = date.and_time(window.start);
            return Some(NextOpening {
                phase,
                start,
                until: start - local,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::CAMPUS_TZ;
    use crate::schedule::interval::DaySet;
    use chrono::TimeZone;

    /// Mon-Fri 6:00-22:00, Sat 9:00-18:00, Sun 10:00-19:00.
    fn gym() -> Schedule {
        Schedule::new().with_phase(
            "Open",
            vec![
                RecurringWindow::new((6, 0), (22, 0), DaySet::WEEKDAYS),
                RecurringWindow::new((9, 0), (18, 0), DaySet::SATURDAY),
                RecurringWindow::new((10, 0), (19, 0), DaySet::SUNDAY),
            ],
        )
    }

    /// Weekday breakfast/lunch/dinner with gaps in between.
    fn dining() -> Schedule {
        Schedule::new()
            .with_phase(
                "Breakfast",
                vec![RecurringWindow::new((7, 0), (10, 30), DaySet::WEEKDAYS)],
            )
            .with_phase(
                "Lunch",
                vec![RecurringWindow::new((11, 0), (14, 30), DaySet::WEEKDAYS)],
            )
            .with_phase(
                "Dinner",
                vec![RecurringWindow::new((16, 30), (19, 45), DaySet::WEEKDAYS)],
            )
    }

    /// 2024-11-04 is a Monday.
    fn monday(hour: u32, minute: u32) -> DateTime<Tz> {
        CAMPUS_TZ
            .with_ymd_and_hms(2024, 11, 4, hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn open_reports_remaining_time() {
        let schedule = gym();
        let status = resolve_weekly_phase(&schedule, monday(19, 45));

        assert_eq!(status.state, DomainState::Open);
        let current = status.current.unwrap();
        assert_eq!(current.phase, "Open");
        assert_eq!(current.remaining, Duration::hours(2) + Duration::minutes(15));
    }

    #[test]
    fn containment_is_minute_granular_not_hour_granular() {
        let schedule = gym();

        // 5:59 is inside the 5-o'clock hour but before opening; a coarse
        // hour-only comparison would wrongly report 6:05 and 5:59 alike.
        assert_eq!(
            resolve_weekly_phase(&schedule, monday(5, 59)).state,
            DomainState::Closed
        );
        assert_eq!(
            resolve_weekly_phase(&schedule, monday(6, 0)).state,
            DomainState::Open
        );
        assert_eq!(
            resolve_weekly_phase(&schedule, monday(21, 59)).state,
            DomainState::Open
        );
        assert_eq!(
            resolve_weekly_phase(&schedule, monday(22, 0)).state,
            DomainState::Closed
        );
    }

    #[test]
    fn closed_after_hours_finds_tomorrows_opening() {
        let schedule = gym();
        let status = resolve_weekly_phase(&schedule, monday(23, 0));

        assert_eq!(status.state, DomainState::Closed);
        assert!(status.current.is_none());
        let next = status.next.unwrap();
        assert_eq!(next.start.to_string(), "2024-11-05 06:00:00");
        assert_eq!(next.until, Duration::hours(7));
    }

    #[test]
    fn closed_before_opening_reports_todays_earliest_window() {
        let schedule = gym();
        let status = resolve_weekly_phase(&schedule, monday(4, 30));

        assert_eq!(status.state, DomainState::Closed);
        let next = status.next.unwrap();
        assert_eq!(next.start.time().to_string(), "06:00:00");
        assert_eq!(next.until, Duration::hours(1) + Duration::minutes(30));
    }

    #[test]
    fn gap_between_meals_is_between_phases_not_closed() {
        let schedule = dining();
        let status = resolve_weekly_phase(&schedule, monday(15, 0));

        assert_eq!(status.state, DomainState::BetweenPhases);
        assert!(status.current.is_none());
        let next = status.next.unwrap();
        assert_eq!(next.phase, "Dinner");
        assert_eq!(next.until, Duration::hours(1) + Duration::minutes(30));
    }

    #[test]
    fn before_first_phase_of_the_day_is_closed_not_between() {
        let schedule = dining();
        let status = resolve_weekly_phase(&schedule, monday(5, 0));

        assert_eq!(status.state, DomainState::Closed);
        assert_eq!(status.next.unwrap().phase, "Breakfast");
    }

    #[test]
    fn search_wraps_over_the_weekend() {
        // Friday 2024-11-08, after dinner; dining is weekday-only so the
        // next opening is Monday breakfast.
        let schedule = dining();
        let friday_night = CAMPUS_TZ
            .with_ymd_and_hms(2024, 11, 8, 21, 0, 0)
            .unwrap();
        let status = resolve_weekly_phase(&schedule, friday_night);

        assert_eq!(status.state, DomainState::Closed);
        let next = status.next.unwrap();
        assert_eq!(next.phase, "Breakfast");
        assert_eq!(next.start.to_string(), "2024-11-11 07:00:00");
    }

    #[test]
    fn single_weekly_window_wraps_a_full_cycle() {
        let schedule = Schedule::new().with_phase(
            "Open",
            vec![RecurringWindow::new((6, 0), (8, 0), DaySet::MONDAY)],
        );
        let status = resolve_weekly_phase(&schedule, monday(12, 0));

        let next = status.next.unwrap();
        assert_eq!(next.start.to_string(), "2024-11-11 06:00:00");
    }

    #[test]
    fn empty_schedule_terminates_with_no_upcoming_opening() {
        let schedule = Schedule::new();
        let status = resolve_weekly_phase(&schedule, monday(12, 0));

        assert_eq!(status.state, DomainState::Closed);
        assert!(status.current.is_none());
        assert!(status.next.is_none());
    }

    #[test]
    fn dayless_windows_terminate_with_no_upcoming_opening() {
        let schedule = Schedule::new().with_phase(
            "Open",
            vec![RecurringWindow::new((6, 0), (22, 0), DaySet::empty())],
        );
        let status = resolve_weekly_phase(&schedule, monday(12, 0));

        assert_eq!(status.state, DomainState::Closed);
        assert!(status.next.is_none());
    }

    #[test]
    fn open_status_still_reports_the_following_window() {
        let schedule = dining();
        let status = resolve_weekly_phase(&schedule, monday(12, 0));

        assert_eq!(status.state, DomainState::Open);
        assert_eq!(status.current.as_ref().unwrap().phase, "Lunch");
        assert_eq!(status.next.unwrap().phase, "Dinner");
    }

    #[test]
    fn single_phase_split_day_gap_is_closed_not_between() {
        let schedule = Schedule::new().with_phase(
            "Open",
            vec![
                RecurringWindow::new((6, 0), (8, 30), DaySet::WEEKDAYS),
                RecurringWindow::new((16, 0), (19, 0), DaySet::WEEKDAYS),
            ],
        );
        let status = resolve_weekly_phase(&schedule, monday(12, 0));

        assert_eq!(status.state, DomainState::Closed);
        assert_eq!(status.next.unwrap().start.time().to_string(), "16:00:00");
    }

    #[test]
    fn resolution_is_idempotent() {
        let schedule = dining();
        let first = resolve_weekly_phase(&schedule, monday(15, 0));
        let second = resolve_weekly_phase(&schedule, monday(15, 0));
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_domain_resolves_as_closed() {
        let table = ScheduleTable::new().with_domain("Gym", gym());
        let status = table.resolve("Natatorium", monday(12, 0));

        assert_eq!(status.state, DomainState::Closed);
        assert!(status.current.is_none());
        assert!(status.next.is_none());
    }
}
