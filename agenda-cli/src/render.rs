//! Colored terminal rendering for calendar views.
//!
//! Keeps all owo_colors styling in one place so the command modules only
//! assemble data.

use std::collections::HashMap;

use agenda_core::{DayCell, Event, EventKind};
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

/// Colorize an event's kind label with its display color.
pub fn kind_tag(kind: EventKind) -> String {
    let label = kind.label();
    match kind.color() {
        "blue" => label.blue().to_string(),
        "red" => label.red().to_string(),
        "green" => label.green().to_string(),
        "purple" => label.purple().to_string(),
        "yellow" => label.yellow().to_string(),
        _ => label.to_string(),
    }
}

/// Render a month grid, one row per week. Days with events carry a `*`
/// marker; today is highlighted, the selected day underlined, and
/// adjacent-month days dimmed.
pub fn render_month(
    reference: NaiveDate,
    grid: &[DayCell],
    buckets: &HashMap<NaiveDate, Vec<Event>>,
    selected: NaiveDate,
) -> String {
    let mut lines = Vec::new();
    lines.push(reference.format("%B %Y").to_string().bold().to_string());
    lines.push("  Mon   Tue   Wed   Thu   Fri   Sat   Sun".dimmed().to_string());

    for week in grid.chunks(7) {
        let mut row = String::new();
        for cell in week {
            let marker = if buckets.get(&cell.date).is_some_and(|b| !b.is_empty()) {
                "*"
            } else {
                " "
            };
            let text = format!("{:>4}{} ", cell.date.day(), marker);
            let styled = if cell.is_today {
                text.bold().green().to_string()
            } else if cell.date == selected {
                text.underline().to_string()
            } else if !cell.in_month {
                text.dimmed().to_string()
            } else {
                text
            };
            row.push_str(&styled);
        }
        lines.push(row);
    }

    lines.join("\n")
}

/// Render one day's events as an indented list under a date header.
pub fn render_day_list(date: NaiveDate, events: &[Event]) -> Vec<String> {
    let mut lines = vec![date.format("%A %e %B %Y").to_string().bold().to_string()];

    if events.is_empty() {
        lines.push(format!("  {}", "No events".dimmed()));
        return lines;
    }

    for event in events {
        lines.push(render_event_line(event));
    }
    lines
}

/// One event as a single line: time span, title, kind tag, and metadata.
pub fn render_event_line(event: &Event) -> String {
    let span = format!(
        "{}-{}",
        event.start.format("%H:%M"),
        event.end.format("%H:%M")
    );
    let mut line = format!("  {}  {} [{}]", span.dimmed(), event.title, kind_tag(event.kind));
    if let Some(location) = &event.location {
        line.push_str(&format!(" @ {location}"));
    }
    if let Some(responsible) = &event.responsible {
        line.push_str(&format!(" {}", format!("({responsible})").dimmed()));
    }
    line
}
