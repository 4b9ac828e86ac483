//! Web API module for the quad application.

pub mod dining;
pub mod error;
pub mod hours;
pub mod professor_ratings;
pub mod rec;
pub mod routes;
pub mod signs;
pub mod status;
pub mod study;

pub use routes::*;
