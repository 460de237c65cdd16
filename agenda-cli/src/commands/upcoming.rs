use agenda_core::{CalendarController, EventStore};
use anyhow::Result;
use chrono::{Local, Utc};
use owo_colors::OwoColorize;

use crate::render;

pub async fn run<S: EventStore>(store: S, owner: u64, limit: usize) -> Result<()> {
    let today = Local::now().date_naive();

    let mut controller = CalendarController::new(store, owner, today);
    controller.reload().await;
    if let Some(notice) = controller.take_notice() {
        eprintln!("{}", notice.red());
    }

    let upcoming = controller.upcoming(Utc::now(), limit);
    if upcoming.is_empty() {
        println!("{}", "No upcoming events this month".dimmed());
        return Ok(());
    }

    for event in &upcoming {
        println!(
            "{} {}",
            event.start.format("%a %Y-%m-%d").to_string().bold(),
            render::render_event_line(event).trim_start()
        );
    }

    Ok(())
}
