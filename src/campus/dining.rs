//! Dining halls and their meal-phase hours.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::schedule::{DaySet, RecurringWindow, Schedule, ScheduleTable};

/// Residential dining halls, each a multi-phase schedule domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DiningHall {
    North,
    South,
    Lakeside,
    Union,
}

/// Named meal phases in day order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum MealPhase {
    Breakfast,
    Lunch,
    Dinner,
    Brunch,
    LateNight,
}

impl MealPhase {
    pub fn label(&self) -> &'static str {
        match self {
            MealPhase::Breakfast => "Breakfast",
            MealPhase::Lunch => "Lunch",
            MealPhase::Dinner => "Dinner",
            MealPhase::Brunch => "Brunch",
            MealPhase::LateNight => "Late Night",
        }
    }
}

impl DiningHall {
    pub const ALL: [DiningHall; 4] = [
        DiningHall::North,
        DiningHall::South,
        DiningHall::Lakeside,
        DiningHall::Union,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DiningHall::North => "north",
            DiningHall::South => "south",
            DiningHall::Lakeside => "lakeside",
            DiningHall::Union => "union",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiningHall::North => "North Dining Hall",
            DiningHall::South => "South Dining Hall",
            DiningHall::Lakeside => "Lakeside Dining Hall",
            DiningHall::Union => "Union Marketplace",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|hall| hall.key().eq_ignore_ascii_case(input))
    }
}

/// Weekday three-meal service with weekend brunch, shared by the
/// residential halls.
fn residential(dinner_end: (u32, u32)) -> Schedule {
    Schedule::new()
        .with_phase(
            MealPhase::Breakfast.label(),
            vec![RecurringWindow::new((7, 0), (10, 30), DaySet::WEEKDAYS)],
        )
        .with_phase(
            MealPhase::Lunch.label(),
            vec![RecurringWindow::new((11, 0), (14, 30), DaySet::WEEKDAYS)],
        )
        .with_phase(
            MealPhase::Brunch.label(),
            vec![RecurringWindow::new((10, 30), (14, 30), DaySet::WEEKENDS)],
        )
        .with_phase(
            MealPhase::Dinner.label(),
            vec![RecurringWindow::new((16, 30), dinner_end, DaySet::EVERY_DAY)],
        )
}

/// Published meal-phase hours for every hall.
pub fn standard_hours() -> ScheduleTable {
    ScheduleTable::new()
        .with_domain(DiningHall::North.key(), residential((19, 45)))
        .with_domain(DiningHall::South.key(), residential((20, 15)))
        .with_domain(DiningHall::Lakeside.key(), residential((19, 30)))
        .with_domain(
            DiningHall::Union.key(),
            // The union runs continuous daytime service plus a late-night
            // window instead of discrete meals.
            Schedule::new()
                .with_phase(
                    MealPhase::Lunch.label(),
                    vec![RecurringWindow::new((10, 30), (16, 0), DaySet::EVERY_DAY)],
                )
                .with_phase(
                    MealPhase::Dinner.label(),
                    vec![RecurringWindow::new((16, 30), (20, 0), DaySet::EVERY_DAY)],
                )
                .with_phase(
                    MealPhase::LateNight.label(),
                    vec![RecurringWindow::new((21, 0), (23, 59), DaySet::WEEKDAYS)],
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::CAMPUS_TZ;
    use crate::schedule::{DomainState, resolve_weekly_phase};
    use chrono::TimeZone;

    #[test]
    fn every_hall_has_a_registered_schedule() {
        let table = standard_hours();
        for hall in DiningHall::ALL {
            assert!(table.get(hall.key()).is_some(), "{hall:?}");
        }
    }

    #[test]
    fn weekday_afternoon_gap_is_between_meals() {
        let table = standard_hours();
        let monday_afternoon = CAMPUS_TZ.with_ymd_and_hms(2024, 11, 4, 15, 10, 0).unwrap();
        let status = table.resolve(DiningHall::North.key(), monday_afternoon);

        assert_eq!(status.state, DomainState::BetweenPhases);
        assert_eq!(status.next.unwrap().phase, MealPhase::Dinner.label());
    }

    #[test]
    fn weekend_serves_brunch_instead_of_breakfast() {
        let table = standard_hours();
        // 2024-11-09 is a Saturday.
        let saturday_morning = CAMPUS_TZ.with_ymd_and_hms(2024, 11, 9, 11, 0, 0).unwrap();
        let status = table.resolve(DiningHall::North.key(), saturday_morning);

        assert_eq!(status.state, DomainState::Open);
        assert_eq!(
            status.current.unwrap().phase,
            MealPhase::Brunch.label()
        );
    }

    #[test]
    fn late_hall_stays_open_after_the_others_close() {
        let schedule = standard_hours();
        let monday_night = CAMPUS_TZ.with_ymd_and_hms(2024, 11, 4, 22, 0, 0).unwrap();

        let north = schedule.resolve(DiningHall::North.key(), monday_night);
        let union = schedule.resolve(DiningHall::Union.key(), monday_night);

        assert_eq!(north.state, DomainState::Closed);
        assert_eq!(union.state, DomainState::Open);
        assert_eq!(
            union.current.unwrap().phase,
            MealPhase::LateNight.label()
        );
    }

    #[test]
    fn hall_schedules_resolve_identically_via_table_or_directly() {
        let table = standard_hours();
        let now = CAMPUS_TZ.with_ymd_and_hms(2024, 11, 4, 12, 0, 0).unwrap();

        let via_table = table.resolve(DiningHall::South.key(), now);
        let direct = resolve_weekly_phase(table.get(DiningHall::South.key()).unwrap(), now);
        assert_eq!(via_table, direct);
    }
}
