//! Shared rendering of resolved weekly statuses into response shapes.

use serde::Serialize;
use ts_rs::TS;

use crate::schedule::{DomainState, ResolvedStatus, fmt_delta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum DomainStateView {
    Open,
    BetweenPhases,
    Closed,
}

impl From<DomainState> for DomainStateView {
    fn from(state: DomainState) -> Self {
        match state {
            DomainState::Open => DomainStateView::Open,
            DomainState::BetweenPhases => DomainStateView::BetweenPhases,
            DomainState::Closed => DomainStateView::Closed,
        }
    }
}

/// One domain's resolved status, rendered for display.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DomainStatusView {
    pub state: DomainStateView,
    /// Current phase name while open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Time left in the current window, e.g. `"2h, 15m"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<String>,
    /// Upcoming phase name, when one exists within the weekly cycle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_phase: Option<String>,
    /// Wall-clock start of the next opening, e.g. `"Tuesday 6:00 AM"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opens_at: Option<String>,
    /// Time until the next opening.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until_open: Option<String>,
}

impl DomainStatusView {
    /// Render a resolved status, capping duration strings at `top` units.
    pub fn from_resolved(status: &ResolvedStatus<'_>, top: usize) -> Self {
        let (phase, remaining) = match &status.current {
            Some(current) => (
                Some(current.phase.to_owned()),
                Some(fmt_delta(current.remaining, Some(top))),
            ),
            None => (None, None),
        };

        let (next_phase, opens_at, until_open) = match &status.next {
            Some(next) => (
                Some(next.phase.to_owned()),
                Some(next.start.format("%A %-I:%M %p").to_string()),
                Some(fmt_delta(next.until, Some(top))),
            ),
            None => (None, None, None),
        };

        Self {
            state: status.state.into(),
            phase,
            remaining,
            next_phase,
            opens_at,
            until_open,
        }
    }
}
