//! REST adapter for the portal events API.
//!
//! Converts between the portal's wire format and the neutral types in
//! agenda-core, the same way a calendar provider converts its API
//! responses. Endpoints:
//!
//!   GET    {base}/events/?user_id=&month=&year=
//!   POST   {base}/events/
//!   PUT    {base}/events/{id}/
//!   DELETE {base}/events/{id}/

use std::collections::HashMap;

use agenda_core::{AgendaError, AgendaResult, Event, EventDraft, EventKind, EventScope, EventStore};
use chrono::{DateTime, Utc};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::Config;

pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// Event as the portal API serializes it.
#[derive(Debug, Deserialize)]
struct WireEvent {
    id: u64,
    title: String,
    #[serde(rename = "type")]
    kind: EventKind,
    date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    professor: Option<String>,
    #[serde(default)]
    description: Option<String>,
    user: u64,
}

fn from_wire(wire: WireEvent) -> Event {
    Event {
        id: wire.id,
        title: wire.title,
        kind: wire.kind,
        start: wire.date,
        end: wire.end_date,
        location: non_blank(wire.location),
        responsible: non_blank(wire.professor),
        description: non_blank(wire.description),
        owner: wire.user,
    }
}

/// The portal stores optional text fields as blank strings.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Draft as the portal API expects it. `user` is only sent on create; on
/// update the server keeps the record's owner.
#[derive(Serialize)]
struct EventPayload<'a> {
    title: &'a str,
    #[serde(rename = "type")]
    kind: EventKind,
    date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    professor: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<u64>,
}

impl<'a> EventPayload<'a> {
    fn new(draft: &'a EventDraft, owner: Option<u64>) -> Self {
        EventPayload {
            title: &draft.title,
            kind: draft.kind,
            date: draft.start,
            end_date: draft.end,
            location: draft.location.as_deref(),
            professor: draft.responsible.as_deref(),
            description: draft.description.as_deref(),
            user: owner,
        }
    }
}

impl RestStore {
    pub fn new(config: &Config) -> Self {
        RestStore {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, format!("{}/{}", self.base_url, path));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Send a request and map non-success statuses onto the error taxonomy.
    async fn send(&self, request: RequestBuilder, id: Option<u64>) -> AgendaResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| AgendaError::Fetch(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(match status {
            StatusCode::NOT_FOUND => AgendaError::NotFound(id.unwrap_or_default()),
            StatusCode::BAD_REQUEST => field_errors(response).await,
            _ => AgendaError::Fetch(format!("server returned {status}")),
        })
    }
}

/// Map the portal's field-error body, `{"title": ["..."]}`, to a validation
/// error on the first offending field (alphabetically, for determinism).
async fn field_errors(response: reqwest::Response) -> AgendaError {
    let body: HashMap<String, Vec<String>> = match response.json().await {
        Ok(body) => body,
        Err(e) => return AgendaError::Fetch(e.to_string()),
    };
    let mut fields: Vec<(String, Vec<String>)> = body.into_iter().collect();
    fields.sort();
    match fields.into_iter().next() {
        Some((field, messages)) => AgendaError::Validation {
            field,
            message: messages.join("; "),
        },
        None => AgendaError::Fetch("server rejected the request".into()),
    }
}

impl EventStore for RestStore {
    async fn list(&self, scope: &EventScope) -> AgendaResult<Vec<Event>> {
        let request = self.request(Method::GET, "events/").query(&[
            ("user_id", scope.owner.to_string()),
            ("month", scope.month.to_string()),
            ("year", scope.year.to_string()),
        ]);
        let response = self.send(request, None).await?;
        let events: Vec<WireEvent> = response
            .json()
            .await
            .map_err(|e| AgendaError::Fetch(e.to_string()))?;
        Ok(events.into_iter().map(from_wire).collect())
    }

    async fn create(&self, owner: u64, draft: &EventDraft) -> AgendaResult<Event> {
        let request = self
            .request(Method::POST, "events/")
            .json(&EventPayload::new(draft, Some(owner)));
        let response = self.send(request, None).await?;
        let event: WireEvent = response
            .json()
            .await
            .map_err(|e| AgendaError::Fetch(e.to_string()))?;
        Ok(from_wire(event))
    }

    async fn update(&self, id: u64, draft: &EventDraft) -> AgendaResult<Event> {
        let request = self
            .request(Method::PUT, &format!("events/{id}/"))
            .json(&EventPayload::new(draft, None));
        let response = self.send(request, Some(id)).await?;
        let event: WireEvent = response
            .json()
            .await
            .map_err(|e| AgendaError::Fetch(e.to_string()))?;
        Ok(from_wire(event))
    }

    async fn delete(&self, id: u64) -> AgendaResult<()> {
        let request = self.request(Method::DELETE, &format!("events/{id}/"));
        self.send(request, Some(id)).await?;
        Ok(())
    }
}
