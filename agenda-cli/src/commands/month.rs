use agenda_core::{CalendarController, EventStore};
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
    controller.reload().await;
    if let Some(notice) = controller.take_notice() {
        eprintln!("{}", notice.red());
    }

    let grid = controller.grid(today);
    let buckets = controller.buckets(today);
    println!(
        "{}",
        render::render_month(controller.reference(), &grid, &buckets, controller.selected())
    );

    println!();
    let selected = controller.selected();
    for line in render::render_day_list(selected, &controller.events_on(selected)) {
        println!("{line}");
    }

    Ok(())
}
