//! Controller flows driven through the in-memory store: modal lifecycle,
//! draft submission, deletion, and the re-fetch-after-mutation policy.

use agenda_core::{
    AgendaError, CalendarController, Event, EventDraft, EventKind, EventScope, EventStore,
    MemoryStore, Modal,
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seeded_event(id: u64, y: i32, m: u32, d: u32, hour: u32) -> Event {
    let start = Utc.with_ymd_and_hms(y, m, d, hour, 0, 0).unwrap();
    Event {
        id,
        title: format!("event-{id}"),
        kind: EventKind::Course,
        start,
        end: start + Duration::hours(1),
        location: None,
        responsible: None,
        description: None,
        owner: 1,
    }
}

/// A store whose create/update/delete always fail with a transport error.
struct OfflineStore;

impl EventStore for OfflineStore {
    async fn list(&self, _scope: &EventScope) -> Result<Vec<Event>, AgendaError> {
        Ok(Vec::new())
    }

    async fn create(&self, _owner: u64, _draft: &EventDraft) -> Result<Event, AgendaError> {
        Err(AgendaError::Fetch("connection refused".into()))
    }

    async fn update(&self, _id: u64, _draft: &EventDraft) -> Result<Event, AgendaError> {
        Err(AgendaError::Fetch("connection refused".into()))
    }

    async fn delete(&self, _id: u64) -> Result<(), AgendaError> {
        Err(AgendaError::Fetch("connection refused".into()))
    }
}

#[tokio::test]
async fn submitting_a_new_draft_closes_the_modal_and_refetches() {
    let store = MemoryStore::new();
    let mut controller = CalendarController::new(store, 1, date(2026, 3, 10));
    controller.reload().await;
    assert!(controller.events().is_empty());

    controller.open_create();
    let draft = controller.draft_mut().unwrap();
    draft.title = "Algebra exam".to_string();
    draft.kind = EventKind::Exam;

    let draft = controller.draft().cloned().unwrap();
    let created = controller.submit(draft).await.unwrap();

    assert!(matches!(controller.modal(), Modal::Closed));
    assert_eq!(controller.events().len(), 1);
    assert_eq!(controller.events()[0].id, created.id);
}

#[tokio::test]
async fn empty_title_submit_keeps_the_creating_modal_unchanged() {
    let store = MemoryStore::new();
    let mut controller = CalendarController::new(store, 1, date(2026, 3, 10));
    controller.reload().await;

    controller.open_create();
    let draft = controller.draft().cloned().unwrap();
    let before = controller.modal().clone();

    let err = controller.submit(draft).await.unwrap_err();
    match err {
        AgendaError::Validation { field, .. } => assert_eq!(field, "title"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(controller.modal(), &before);
}

#[tokio::test]
async fn transport_failure_on_create_keeps_the_unsaved_draft_open() {
    let mut controller = CalendarController::new(OfflineStore, 1, date(2026, 3, 10));

    controller.open_create();
    let draft = controller.draft_mut().unwrap();
    draft.title = "Physics lab".to_string();

    let draft = controller.draft().cloned().unwrap();
    let err = controller.submit(draft).await.unwrap_err();
    assert!(matches!(err, AgendaError::Fetch(_)));

    match controller.modal() {
        Modal::Creating(draft) => assert_eq!(draft.title, "Physics lab"),
        other => panic!("expected creating modal, got {other:?}"),
    }
}

#[tokio::test]
async fn editing_submits_a_full_record_replace() {
    let store = MemoryStore::seeded(vec![seeded_event(1, 2026, 3, 10, 9)]);
    let mut controller = CalendarController::new(store, 1, date(2026, 3, 10));
    controller.reload().await;

    let event = controller.events()[0].clone();
    controller.open_details(event.clone());
    controller.open_edit(&event);

    let draft = controller.draft_mut().unwrap();
    draft.title = "Renamed lecture".to_string();
    let draft = controller.draft().cloned().unwrap();

    let updated = controller.submit(draft).await.unwrap();
    assert_eq!(updated.id, 1);
    assert!(matches!(controller.modal(), Modal::Closed));
    assert_eq!(controller.events()[0].title, "Renamed lecture");
}

#[tokio::test]
async fn updating_an_event_deleted_elsewhere_closes_the_stale_modal() {
    let store = MemoryStore::seeded(vec![seeded_event(1, 2026, 3, 10, 9)]);
    let mut controller = CalendarController::new(store, 1, date(2026, 3, 10));
    controller.reload().await;

    let mut gone = seeded_event(42, 2026, 3, 11, 10);
    gone.title = "Deleted on another device".to_string();
    controller.open_edit(&gone);

    let draft = controller.draft().cloned().unwrap();
    let err = controller.submit(draft).await.unwrap_err();
    assert!(matches!(err, AgendaError::NotFound(42)));
    assert!(matches!(controller.modal(), Modal::Closed));
}

#[tokio::test]
async fn delete_closes_the_details_modal_and_refetches() {
    let store = MemoryStore::seeded(vec![
        seeded_event(1, 2026, 3, 10, 9),
        seeded_event(2, 2026, 3, 11, 14),
    ]);
    let mut controller = CalendarController::new(store, 1, date(2026, 3, 10));
    controller.reload().await;

    let event = controller.events()[0].clone();
    controller.open_details(event.clone());
    controller.delete_event(event.id).await.unwrap();

    assert!(matches!(controller.modal(), Modal::Closed));
    let ids: Vec<u64> = controller.events().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2]);
}

#[tokio::test]
async fn deleting_a_missing_id_reports_not_found_and_closes_its_modal() {
    let store = MemoryStore::seeded(vec![seeded_event(1, 2026, 3, 10, 9)]);
    let mut controller = CalendarController::new(store, 1, date(2026, 3, 10));
    controller.reload().await;

    controller.open_details(seeded_event(42, 2026, 3, 12, 9));
    let err = controller.delete_event(42).await.unwrap_err();

    assert!(matches!(err, AgendaError::NotFound(42)));
    assert!(matches!(controller.modal(), Modal::Closed));
    // The re-fetch still happened and the cache reflects the store.
    assert_eq!(controller.events().len(), 1);
}

#[tokio::test]
async fn delete_leaves_unrelated_modals_open() {
    let store = MemoryStore::seeded(vec![
        seeded_event(1, 2026, 3, 10, 9),
        seeded_event(2, 2026, 3, 11, 14),
    ]);
    let mut controller = CalendarController::new(store, 1, date(2026, 3, 10));
    controller.reload().await;

    let kept = controller.events()[1].clone();
    controller.open_details(kept);
    controller.delete_event(1).await.unwrap();

    assert!(matches!(controller.modal(), Modal::ViewingDetails(e) if e.id == 2));
}
