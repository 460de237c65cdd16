use agenda_core::{CalendarController, EventStore, ViewMode, week_of};
use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use crate::render;

pub async fn run<S: EventStore>(store: S, owner: u64, date: Option<String>) -> Result<()> {
    let today = Local::now().date_naive();
    let focus = match date {
        Some(s) => super::parse_date(&s)?,
        None => today,
    };

    let mut controller = CalendarController::new(store, owner, focus);
    controller.set_view(ViewMode::Week);
    controller.reload().await;
    if let Some(notice) = controller.take_notice() {
        eprintln!("{}", notice.red());
    }

    for day in week_of(controller.reference()) {
        for line in render::render_day_list(day, &controller.events_on(day)) {
            println!("{line}");
        }
        println!();
    }

    Ok(())
}
