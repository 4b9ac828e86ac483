//! The interval & schedule resolution engine.
//!
//! Pure, synchronous, clock-injected: every resolver takes "now" as a
//! parameter and returns a freshly computed snapshot. Live views re-invoke
//! on a timer; there is no cached or shared mutable state here.

pub mod duration;
pub mod events;
pub mod interval;
pub mod occupancy;
pub mod weekly;

pub use duration::fmt_delta;
pub use events::{DatedResolution, EventRecord, resolve_dated_events};
pub use interval::{DaySet, RecurringWindow};
pub use occupancy::{OccupantRecord, slot_label, typical_for_timeslot};
pub use weekly::{
    CurrentPhase, DomainState, NextOpening, ResolvedStatus, Schedule, ScheduleTable,
    resolve_weekly_phase,
};
