//! Core types for the parish website.
//!
//! - `event` / `recurrence`: event records and their repeat patterns
//! - `occurrence`: which events happen on a given day
//! - `month`: the calendar widget grid
//! - `location`: display text for the location column
//! - `store` / `admin`: the external events table and admin check

pub mod admin;
pub mod config;
pub mod error;
pub mod event;
pub mod location;
pub mod month;
pub mod occurrence;
pub mod recurrence;
pub mod store;

pub use error::{ParishError, ParishResult};
pub use event::{Event, EventStatus};
pub use occurrence::{Schedule, events_on, has_any_event_on, occurs_on, upcoming};
pub use recurrence::Recurrence;
