//! Recreation center facilities and their standard weekly hours.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::schedule::{DaySet, RecurringWindow, Schedule, ScheduleTable};

/// Facilities inside the recreation complex, each its own schedule domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RecFacility {
    Src,
    Aquatic,
    Climb,
    Adventure,
    Admin,
}

impl RecFacility {
    pub const ALL: [RecFacility; 5] = [
        RecFacility::Src,
        RecFacility::Aquatic,
        RecFacility::Climb,
        RecFacility::Adventure,
        RecFacility::Admin,
    ];

    /// Schedule-table domain key.
    pub fn key(&self) -> &'static str {
        match self {
            RecFacility::Src => "src",
            RecFacility::Aquatic => "aquatic",
            RecFacility::Climb => "climb",
            RecFacility::Adventure => "adventure",
            RecFacility::Admin => "admin",
        }
    }

    /// Display name for the web layer.
    pub fn label(&self) -> &'static str {
        match self {
            RecFacility::Src => "Recreation Center",
            RecFacility::Aquatic => "Aquatic Center",
            RecFacility::Climb => "Climbing Center",
            RecFacility::Adventure => "Adventure Center",
            RecFacility::Admin => "Admin Offices",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|facility| facility.key().eq_ignore_ascii_case(input))
    }
}

/// Standard published hours for every rec facility.
///
/// Each facility is a single-phase domain; split-day facilities (the pools)
/// register several windows under the one phase.
pub fn standard_hours() -> ScheduleTable {
    ScheduleTable::new()
        .with_domain(
            RecFacility::Src.key(),
            Schedule::new().with_phase(
                "Open",
                vec![
                    RecurringWindow::new((6, 0), (22, 0), DaySet::WEEKDAYS),
                    RecurringWindow::new((9, 0), (18, 0), DaySet::SATURDAY),
                    RecurringWindow::new((10, 0), (19, 0), DaySet::SUNDAY),
                ],
            ),
        )
        .with_domain(
            RecFacility::Aquatic.key(),
            Schedule::new().with_phase(
                "Open",
                vec![
                    RecurringWindow::new((6, 0), (8, 30), DaySet::WEEKDAYS),
                    RecurringWindow::new((10, 0), (14, 0), DaySet::EVERY_DAY),
                    RecurringWindow::new((16, 0), (19, 0), DaySet::EVERY_DAY),
                ],
            ),
        )
        .with_domain(
            RecFacility::Climb.key(),
            Schedule::new().with_phase(
                "Open",
                vec![
                    RecurringWindow::new(
                        (12, 0),
                        (22, 0),
                        DaySet::MONDAY | DaySet::TUESDAY | DaySet::WEDNESDAY | DaySet::THURSDAY,
                    ),
                    RecurringWindow::new((12, 0), (20, 0), DaySet::FRIDAY),
                    RecurringWindow::new((12, 0), (16, 0), DaySet::SATURDAY),
                    RecurringWindow::new((18, 0), (22, 0), DaySet::SUNDAY),
                ],
            ),
        )
        .with_domain(
            RecFacility::Adventure.key(),
            Schedule::new().with_phase(
                "Open",
                vec![
                    RecurringWindow::new((11, 0), (18, 0), DaySet::WEEKDAYS),
                    RecurringWindow::new((10, 0), (14, 0), DaySet::WEEKENDS),
                ],
            ),
        )
        .with_domain(
            RecFacility::Admin.key(),
            Schedule::new().with_phase(
                "Open",
                vec![RecurringWindow::new((9, 0), (17, 0), DaySet::WEEKDAYS)],
            ),
        )
}
