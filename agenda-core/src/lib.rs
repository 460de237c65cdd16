//! Calendar domain logic for the agenda academic portal.
//!
//! The portal's calendar page is driven by three pieces:
//! - [`grid`]: pure month-grid construction (Monday-start, complete weeks),
//! - [`bucket`]: grouping fetched events by calendar day,
//! - [`controller`]: the view state machine tying both to an
//!   [`store::EventStore`].
//!
//! Storage is abstracted behind the [`store::EventStore`] trait;
//! [`memory::MemoryStore`] backs tests and demos, the REST adapter in
//! agenda-cli backs the real portal.

pub mod bucket;
pub mod controller;
pub mod error;
pub mod event;
pub mod grid;
pub mod memory;
pub mod store;

pub use bucket::day_buckets;
pub use controller::{CalendarController, Direction, FetchTicket, Modal, ViewMode};
pub use error::{AgendaError, AgendaResult};
pub use event::{Event, EventDraft, EventKind};
pub use grid::{DayCell, month_grid, week_of};
pub use memory::MemoryStore;
pub use store::{EventScope, EventStore};
