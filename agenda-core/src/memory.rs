//! In-memory event store, used by tests and offline demos.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{AgendaError, AgendaResult};
use crate::event::{Event, EventDraft};
use crate::store::{EventScope, EventStore};

/// An [`EventStore`] backed by a plain `Vec` behind a mutex.
///
/// Mirrors the server's behavior closely enough for controller tests:
/// ids are assigned on create, update and delete fail with `NotFound`
/// for missing ids, and create/update re-run draft validation.
pub struct MemoryStore {
    events: Mutex<Vec<Event>>,
    next_id: AtomicU64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            events: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Start with a known set of events; the id counter resumes after the
    /// highest seeded id.
    pub fn seeded(events: Vec<Event>) -> Self {
        let max_id = events.iter().map(|e| e.id).max().unwrap_or(0);
        MemoryStore {
            events: Mutex::new(events),
            next_id: AtomicU64::new(max_id + 1),
        }
    }
}

impl EventStore for MemoryStore {
    async fn list(&self, scope: &EventScope) -> AgendaResult<Vec<Event>> {
        let events = self.events.lock().unwrap();
        Ok(events.iter().filter(|e| scope.contains(e)).cloned().collect())
    }

    async fn create(&self, owner: u64, draft: &EventDraft) -> AgendaResult<Event> {
        draft.validate()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let event = draft.to_event(id, owner);
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn update(&self, id: u64, draft: &EventDraft) -> AgendaResult<Event> {
        draft.validate()?;
        let mut events = self.events.lock().unwrap();
        let slot = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(AgendaError::NotFound(id))?;
        let updated = draft.to_event(id, slot.owner);
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: u64) -> AgendaResult<()> {
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Err(AgendaError::NotFound(id));
        }
        Ok(())
    }
}
