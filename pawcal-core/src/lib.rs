//! Booking calendar core for pawcal.
//!
//! - [`event`]: event records and calendar categories
//! - [`store`], [`reducer`], [`view`]: event store state, its pure
//!   transitions and the filtered projections views render
//! - [`overlap`], [`commit`]: the per-hour capacity rule and the validated
//!   write path built on it
//! - [`session`], [`remote`], [`snapshot`], [`config`]: everything that
//!   touches disk or network

pub mod capability;
pub mod commit;
pub mod config;
pub mod error;
pub mod event;
pub mod overlap;
pub mod reducer;
pub mod remote;
pub mod session;
pub mod snapshot;
pub mod store;
pub mod view;

pub use commit::{Commit, Rejection, Scheduler};
pub use event::{CalendarCategory, EventRecord, ExtendedProps};
pub use store::EventStore;
