//! Portal-neutral event types.
//!
//! These types represent academic calendar events independently of the
//! transport. The REST adapter in agenda-cli converts the portal's wire
//! format into these types, and the controller, grid, and bucketizer work
//! exclusively with them.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, AgendaResult};

/// A scheduled academic occurrence (course, exam, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Server-assigned identifier.
    pub id: u64,
    pub title: String,
    pub kind: EventKind,
    pub start: DateTime<Utc>,
    /// Always strictly after `start`.
    pub end: DateTime<Utc>,
    pub location: Option<String>,
    /// Person in charge (professor, supervisor).
    pub responsible: Option<String>,
    pub description: Option<String>,
    /// User scope the event belongs to.
    pub owner: u64,
}

/// The fixed set of event types; determines display color and label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Course,
    Exam,
    Lab,
    Meeting,
    Assignment,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Course,
        EventKind::Exam,
        EventKind::Lab,
        EventKind::Meeting,
        EventKind::Assignment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Course => "Course",
            EventKind::Exam => "Exam",
            EventKind::Lab => "Lab",
            EventKind::Meeting => "Meeting",
            EventKind::Assignment => "Assignment",
        }
    }

    /// Display color name used by front ends.
    pub fn color(&self) -> &'static str {
        match self {
            EventKind::Course => "blue",
            EventKind::Exam => "red",
            EventKind::Lab => "green",
            EventKind::Meeting => "purple",
            EventKind::Assignment => "yellow",
        }
    }
}

impl std::str::FromStr for EventKind {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "course" => Ok(EventKind::Course),
            "exam" => Ok(EventKind::Exam),
            "lab" => Ok(EventKind::Lab),
            "meeting" => Ok(EventKind::Meeting),
            "assignment" => Ok(EventKind::Assignment),
            other => {
                let expected: Vec<String> = EventKind::ALL
                    .iter()
                    .map(|k| k.label().to_lowercase())
                    .collect();
                Err(AgendaError::validation(
                    "type",
                    format!(
                        "unknown event type '{other}' (expected one of: {})",
                        expected.join(", ")
                    ),
                ))
            }
        }
    }
}

/// User-entered, not-yet-persisted event data held in the create/edit modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    /// Present when editing an existing event; `None` means create.
    pub id: Option<u64>,
    pub title: String,
    pub kind: EventKind,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: Option<String>,
    pub responsible: Option<String>,
    pub description: Option<String>,
}

impl EventDraft {
    /// Pre-fill a one-hour slot (08:00-09:00 UTC) on the given day.
    pub fn for_date(date: NaiveDate) -> Self {
        let start = date.and_hms_opt(8, 0, 0).unwrap().and_utc();
        EventDraft {
            id: None,
            title: String::new(),
            kind: EventKind::Course,
            start,
            end: start + Duration::hours(1),
            location: None,
            responsible: None,
            description: None,
        }
    }

    pub fn from_event(event: &Event) -> Self {
        EventDraft {
            id: Some(event.id),
            title: event.title.clone(),
            kind: event.kind,
            start: event.start,
            end: event.end,
            location: event.location.clone(),
            responsible: event.responsible.clone(),
            description: event.description.clone(),
        }
    }

    /// Client-side validation: non-blank title, end strictly after start.
    pub fn validate(&self) -> AgendaResult<()> {
        if self.title.trim().is_empty() {
            return Err(AgendaError::validation("title", "title must not be empty"));
        }
        if self.end <= self.start {
            return Err(AgendaError::validation("end", "end must be after start"));
        }
        Ok(())
    }

    /// Materialize the draft as a persisted event.
    pub fn to_event(&self, id: u64, owner: u64) -> Event {
        Event {
            id,
            title: self.title.clone(),
            kind: self.kind,
            start: self.start,
            end: self.end,
            location: self.location.clone(),
            responsible: self.responsible.clone(),
            description: self.description.clone(),
            owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft_at(title: &str, start_hour: u32, end_hour: u32) -> EventDraft {
        EventDraft {
            id: None,
            title: title.to_string(),
            kind: EventKind::Exam,
            start: Utc.with_ymd_and_hms(2026, 3, 10, start_hour, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 3, 10, end_hour, 0, 0).unwrap(),
            location: None,
            responsible: None,
            description: None,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft_at("Algebra exam", 9, 11).validate().is_ok());
    }

    #[test]
    fn blank_title_is_rejected_on_title_field() {
        let err = draft_at("   ", 9, 11).validate().unwrap_err();
        match err {
            AgendaError::Validation { field, .. } => assert_eq!(field, "title"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn end_not_after_start_is_rejected() {
        let err = draft_at("Algebra exam", 11, 11).validate().unwrap_err();
        match err {
            AgendaError::Validation { field, .. } => assert_eq!(field, "end"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("Exam".parse::<EventKind>().unwrap(), EventKind::Exam);
        assert_eq!("lab".parse::<EventKind>().unwrap(), EventKind::Lab);
        assert!("party".parse::<EventKind>().is_err());
    }
}
