//! Calendar view state and orchestration.
//!
//! [`CalendarController`] owns the transient state of the calendar page
//! (reference period, selected day, view mode, modal) and composes the
//! month grid and day bucketizer with an [`EventStore`]. Every mutation
//! goes through the store and is followed by a re-fetch of the visible
//! month; the controller never patches its cache locally, so it can never
//! drift from the server.
//!
//! Fetches are sequenced: navigating away from a month whose fetch is
//! still pending logically cancels it, and only the most recently issued
//! fetch may update the displayed events (last request wins).

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::bucket::day_buckets;
use crate::error::{AgendaError, AgendaResult};
use crate::event::{Event, EventDraft};
use crate::grid::{DayCell, month_grid, next_month, prev_month};
use crate::store::{EventScope, EventStore};

/// Which period layout is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Month,
    Week,
    Day,
}

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
    Today,
}

/// Modal state of the calendar page.
///
/// A tagged union rather than independent booleans, so the page can never
/// be simultaneously creating and editing. Every exit path leads back to
/// `Closed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Creating(EventDraft),
    Editing(EventDraft),
    ViewingDetails(Event),
}

/// Handle for an in-flight month fetch.
///
/// A response is applied only while its ticket is still the most recently
/// issued one, so a stale response for an abandoned month can never
/// overwrite a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    pub scope: EventScope,
}

pub struct CalendarController<S> {
    store: S,
    owner: u64,
    reference: NaiveDate,
    selected: NaiveDate,
    view: ViewMode,
    modal: Modal,
    /// Read-through cache of the visible month's events.
    events: Vec<Event>,
    /// Last non-blocking failure, shown as a toast by the front end.
    notice: Option<String>,
    loading: bool,
    last_issued: u64,
}

impl<S: EventStore> CalendarController<S> {
    /// Create a controller focused on `focus` (reference and selected day).
    /// No fetch is issued; call [`Self::reload`] to load the first month.
    pub fn new(store: S, owner: u64, focus: NaiveDate) -> Self {
        CalendarController {
            store,
            owner,
            reference: focus,
            selected: focus,
            view: ViewMode::default(),
            modal: Modal::default(),
            events: Vec::new(),
            notice: None,
            loading: false,
            last_issued: 0,
        }
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Take the pending failure notice, if any.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Focus a day without touching the modal or triggering a fetch.
    pub fn select_day(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    /// Step the reference date by the active view, or jump to today.
    ///
    /// Returns a fetch ticket only when the visible month actually changed;
    /// repeating `navigate(Today)` therefore never issues a duplicate
    /// fetch. `selected` only moves when navigating to today.
    pub fn navigate(&mut self, direction: Direction, today: NaiveDate) -> Option<FetchTicket> {
        let before = EventScope::for_month(self.owner, self.reference);

        match direction {
            Direction::Today => {
                self.reference = today;
                self.selected = today;
            }
            Direction::Prev => self.reference = self.step_back(),
            Direction::Next => self.reference = self.step_forward(),
        }

        let after = EventScope::for_month(self.owner, self.reference);
        if after == before { None } else { Some(self.refresh()) }
    }

    fn step_back(&self) -> NaiveDate {
        match self.view {
            ViewMode::Month => prev_month(self.reference),
            ViewMode::Week => self.reference - Duration::days(7),
            ViewMode::Day => self.reference - Duration::days(1),
        }
    }

    fn step_forward(&self) -> NaiveDate {
        match self.view {
            ViewMode::Month => next_month(self.reference),
            ViewMode::Week => self.reference + Duration::days(7),
            ViewMode::Day => self.reference + Duration::days(1),
        }
    }

    // ------------------------------------------------------------------
    // Fetching
    // ------------------------------------------------------------------

    /// Issue a fetch ticket for the currently visible month.
    pub fn refresh(&mut self) -> FetchTicket {
        self.last_issued += 1;
        self.loading = true;
        FetchTicket {
            seq: self.last_issued,
            scope: EventScope::for_month(self.owner, self.reference),
        }
    }

    /// Run a ticket against the store and apply its outcome.
    pub async fn fetch(&mut self, ticket: FetchTicket) {
        let result = self.store.list(&ticket.scope).await;
        self.apply_fetch(ticket, result);
    }

    /// Apply a fetch outcome.
    ///
    /// Tickets older than the most recently issued one are responses for an
    /// abandoned month and are dropped. A failed fetch keeps the previously
    /// displayed events (stale but visible) and records a notice.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: AgendaResult<Vec<Event>>) {
        if ticket.seq != self.last_issued {
            return;
        }
        self.loading = false;
        match result {
            Ok(events) => self.events = events,
            Err(err) => self.notice = Some(err.to_string()),
        }
    }

    /// Issue and await a fetch for the visible month.
    pub async fn reload(&mut self) {
        let ticket = self.refresh();
        self.fetch(ticket).await;
    }

    // ------------------------------------------------------------------
    // Modal state machine
    // ------------------------------------------------------------------

    /// Open the create modal with a draft pre-filled for the selected day.
    pub fn open_create(&mut self) {
        self.modal = Modal::Creating(EventDraft::for_date(self.selected));
    }

    /// Open the edit modal for an existing event.
    pub fn open_edit(&mut self, event: &Event) {
        self.modal = Modal::Editing(EventDraft::from_event(event));
    }

    /// Open the details modal for a rendered event chip.
    pub fn open_details(&mut self, event: Event) {
        self.modal = Modal::ViewingDetails(event);
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    /// The draft of an open create/edit modal.
    pub fn draft(&self) -> Option<&EventDraft> {
        match &self.modal {
            Modal::Creating(draft) | Modal::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    /// Mutable access to the draft of an open create/edit modal.
    pub fn draft_mut(&mut self) -> Option<&mut EventDraft> {
        match &mut self.modal {
            Modal::Creating(draft) | Modal::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Validate and persist a draft.
    ///
    /// Creates when the draft has no id, replaces the full record when it
    /// does. Validation failures and transport errors leave the modal (and
    /// the user's unsaved input) untouched. `NotFound` on update means the
    /// event was deleted elsewhere: the stale modal closes and the month is
    /// re-fetched. Success closes the modal and re-fetches.
    pub async fn submit(&mut self, draft: EventDraft) -> AgendaResult<Event> {
        draft.validate()?;

        let result = match draft.id {
            Some(id) => self.store.update(id, &draft).await,
            None => self.store.create(self.owner, &draft).await,
        };

        match result {
            Ok(event) => {
                self.modal = Modal::Closed;
                self.reload().await;
                Ok(event)
            }
            Err(AgendaError::NotFound(id)) => {
                self.modal = Modal::Closed;
                self.reload().await;
                Err(AgendaError::NotFound(id))
            }
            Err(err) => Err(err),
        }
    }

    /// Delete an event by id. Confirmation is the caller's concern.
    ///
    /// Both success and `NotFound` close any modal referencing the id and
    /// re-fetch the month; `NotFound` is still reported so the front end
    /// can tell the user the event was already gone.
    pub async fn delete_event(&mut self, id: u64) -> AgendaResult<()> {
        let result = self.store.delete(id).await;
        match &result {
            Ok(()) | Err(AgendaError::NotFound(_)) => {
                if self.modal_references(id) {
                    self.modal = Modal::Closed;
                }
                self.reload().await;
            }
            Err(_) => {}
        }
        result
    }

    fn modal_references(&self, id: u64) -> bool {
        match &self.modal {
            Modal::ViewingDetails(event) => event.id == id,
            Modal::Editing(draft) => draft.id == Some(id),
            _ => false,
        }
    }

    // ------------------------------------------------------------------
    // View composition
    // ------------------------------------------------------------------

    /// Month grid cells for the visible month.
    pub fn grid(&self, today: NaiveDate) -> Vec<DayCell> {
        month_grid(self.reference, today)
    }

    /// Cached events grouped by grid day.
    pub fn buckets(&self, today: NaiveDate) -> HashMap<NaiveDate, Vec<Event>> {
        day_buckets(&self.events, &self.grid(today))
    }

    /// Cached events on a single day, in bucket order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        let mut on_day: Vec<Event> = self
            .events
            .iter()
            .filter(|e| e.start.date_naive() == date)
            .cloned()
            .collect();
        on_day.sort_by_key(|e| (e.start, e.id));
        on_day
    }

    /// The next `limit` cached events starting at or after `now`.
    pub fn upcoming(&self, now: DateTime<Utc>, limit: usize) -> Vec<Event> {
        let mut future: Vec<Event> = self
            .events
            .iter()
            .filter(|e| e.start >= now)
            .cloned()
            .collect();
        future.sort_by_key(|e| (e.start, e.id));
        future.truncate(limit);
        future
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn controller_at(focus: NaiveDate) -> CalendarController<MemoryStore> {
        CalendarController::new(MemoryStore::new(), 1, focus)
    }

    #[test]
    fn select_day_never_touches_the_modal() {
        let mut controller = controller_at(date(2026, 3, 10));
        controller.open_create();
        controller.select_day(date(2026, 3, 12));
        assert!(matches!(controller.modal(), Modal::Creating(_)));
        assert_eq!(controller.selected(), date(2026, 3, 12));
    }

    #[test]
    fn create_draft_is_prefilled_with_the_selected_day() {
        let mut controller = controller_at(date(2026, 3, 10));
        controller.select_day(date(2026, 3, 14));
        controller.open_create();
        let draft = controller.draft().unwrap();
        assert_eq!(draft.start.date_naive(), date(2026, 3, 14));
        assert!(draft.id.is_none());
    }

    #[test]
    fn closing_any_modal_returns_to_closed() {
        let mut controller = controller_at(date(2026, 3, 10));
        controller.open_create();
        controller.close_modal();
        assert!(matches!(controller.modal(), Modal::Closed));
    }

    #[test]
    fn week_navigation_within_a_month_issues_no_fetch() {
        let mut controller = controller_at(date(2026, 3, 10));
        controller.set_view(ViewMode::Week);
        // March 10 -> 17: same month, no new scope.
        assert!(controller.navigate(Direction::Next, date(2026, 3, 10)).is_none());
        assert_eq!(controller.reference(), date(2026, 3, 17));
    }

    #[test]
    fn day_navigation_across_month_boundary_issues_a_fetch() {
        let mut controller = controller_at(date(2026, 3, 31));
        controller.set_view(ViewMode::Day);
        let ticket = controller.navigate(Direction::Next, date(2026, 3, 31));
        assert_eq!(ticket.unwrap().scope.month, 4);
        assert_eq!(controller.reference(), date(2026, 4, 1));
    }

    #[test]
    fn month_navigation_from_january_31_clamps_and_fetches_february() {
        let mut controller = controller_at(date(2026, 1, 31));
        let ticket = controller.navigate(Direction::Next, date(2026, 1, 31));
        assert_eq!(controller.reference(), date(2026, 2, 28));
        assert_eq!(ticket.unwrap().scope.month, 2);
    }
}
