//! Storage interface for calendar events.
//!
//! The controller talks to its store of record exclusively through this
//! trait, so the transport can be REST (agenda-cli), in-memory
//! ([`crate::memory::MemoryStore`]), or anything else that honors the
//! contract. The store is the only source of truth: the controller keeps a
//! read-through cache of the visible month and never patches it locally.

use chrono::{Datelike, NaiveDate};

use crate::error::AgendaResult;
use crate::event::{Event, EventDraft};

/// Query scope for one month of events belonging to one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventScope {
    pub owner: u64,
    pub month: u32,
    pub year: i32,
}

impl EventScope {
    pub fn for_month(owner: u64, reference: NaiveDate) -> Self {
        EventScope {
            owner,
            month: reference.month(),
            year: reference.year(),
        }
    }

    /// Whether an event's start falls inside this scope.
    pub fn contains(&self, event: &Event) -> bool {
        event.owner == self.owner
            && event.start.month() == self.month
            && event.start.year() == self.year
    }
}

/// Store of record for events.
#[allow(async_fn_in_trait)]
pub trait EventStore {
    /// List all events for the given owner and month.
    async fn list(&self, scope: &EventScope) -> AgendaResult<Vec<Event>>;

    /// Persist a new event; the store assigns the id.
    async fn create(&self, owner: u64, draft: &EventDraft) -> AgendaResult<Event>;

    /// Replace the full record of an existing event.
    async fn update(&self, id: u64, draft: &EventDraft) -> AgendaResult<Event>;

    async fn delete(&self, id: u64) -> AgendaResult<()>;
}

// Shared handles to a store are stores themselves, so a caller can keep a
// reference to the store it hands the controller.
impl<S: EventStore> EventStore for std::sync::Arc<S> {
    async fn list(&self, scope: &EventScope) -> AgendaResult<Vec<Event>> {
        self.as_ref().list(scope).await
    }

    async fn create(&self, owner: u64, draft: &EventDraft) -> AgendaResult<Event> {
        self.as_ref().create(owner, draft).await
    }

    async fn update(&self, id: u64, draft: &EventDraft) -> AgendaResult<Event> {
        self.as_ref().update(id, draft).await
    }

    async fn delete(&self, id: u64) -> AgendaResult<()> {
        self.as_ref().delete(id).await
    }
}
