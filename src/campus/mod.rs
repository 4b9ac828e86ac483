//! Compiled-in campus schedule data.
//!
//! Hours live here as typed window records keyed by phase, loaded once
//! into application state, never as control-flow branches in resolvers.

pub mod dining;
pub mod rec;

pub use dining::{DiningHall, MealPhase};
pub use rec::RecFacility;
