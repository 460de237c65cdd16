use agenda_core::{CalendarController, EventKind, EventStore};
use anyhow::{Context, Result, bail};
use chrono::Local;
use owo_colors::OwoColorize;

#[derive(clap::Args)]
pub struct EditArgs {
    /// Event id
    pub id: u64,

    /// A date inside the month holding the event (defaults to this month)
    #[arg(long)]
    pub date: Option<String>,

    #[arg(short, long)]
    pub title: Option<String>,

    /// Start (YYYY-MM-DDTHH:MM)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End (YYYY-MM-DDTHH:MM)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Event type: course, exam, lab, meeting, assignment
    #[arg(short, long)]
    pub kind: Option<String>,

    #[arg(short, long)]
    pub location: Option<String>,

    /// Person in charge (professor, supervisor)
    #[arg(short, long)]
    pub responsible: Option<String>,

    #[arg(short = 'D', long)]
    pub description: Option<String>,
}

pub async fn run<S: EventStore>(store: S, owner: u64, args: EditArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let focus = match &args.date {
        Some(s) => super::parse_date(s)?,
        None => today,
    };

    let mut controller = CalendarController::new(store, owner, focus);
    controller.reload().await;
    if let Some(notice) = controller.take_notice() {
        bail!("{notice}");
    }

    let Some(event) = controller.events().iter().find(|e| e.id == args.id).cloned() else {
        bail!(
            "Event {} not found in {}. Pass --date for the month it belongs to.",
            args.id,
            focus.format("%B %Y")
        );
    };

    controller.open_edit(&event);
    let draft = controller.draft_mut().context("edit modal not open")?;
    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(start) = &args.start {
        draft.start = super::parse_datetime(start)?;
    }
    if let Some(end) = &args.end {
        draft.end = super::parse_datetime(end)?;
    }
    if let Some(kind) = &args.kind {
        draft.kind = kind.parse::<EventKind>()?;
    }
    if let Some(location) = args.location {
        draft.location = Some(location);
    }
    if let Some(responsible) = args.responsible {
        draft.responsible = Some(responsible);
    }
    if let Some(description) = args.description {
        draft.description = Some(description);
    }

    let draft = controller.draft().cloned().context("edit modal not open")?;
    let event = controller.submit(draft).await?;

    println!(
        "{}",
        format!("Updated: {} (id {})", event.title, event.id).green()
    );
    Ok(())
}
