use agenda_core::{CalendarController, EventStore};
use anyhow::Result;
use chrono::Local;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

pub async fn run<S: EventStore>(store: S, owner: u64, id: u64, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete event {id}?"))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Aborted".dimmed());
            return Ok(());
        }
    }

    let today = Local::now().date_naive();
    let mut controller = CalendarController::new(store, owner, today);
    controller.delete_event(id).await?;

    println!("{}", format!("Deleted event {id}").green());
    Ok(())
}
