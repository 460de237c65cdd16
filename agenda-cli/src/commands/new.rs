use agenda_core::{CalendarController, EventKind, EventStore};
use anyhow::{Context, Result};
use chrono::Duration;
use owo_colors::OwoColorize;

#[derive(clap::Args)]
pub struct NewArgs {
    /// Event title
    pub title: String,

    /// Start (YYYY-MM-DDTHH:MM)
    #[arg(short, long)]
    pub start: String,

    /// End (defaults to one hour after start)
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

    #[arg(short, long)]
    pub description: Option<String>,
}

pub async fn run<S: EventStore>(store: S, owner: u64, args: NewArgs) -> Result<()> {
    let start = super::parse_datetime(&args.start)?;
    let end = match &args.end {
        Some(s) => super::parse_datetime(s)?,
        None => start + Duration::hours(1),
    };
    let kind = match &args.kind {
        Some(s) => Some(s.parse::<EventKind>()?),
        None => None,
    };

    let mut controller = CalendarController::new(store, owner, start.date_naive());
    controller.open_create();

    let draft = controller.draft_mut().context("create modal not open")?;
    draft.title = args.title;
    draft.start = start;
    draft.end = end;
    if let Some(kind) = kind {
        draft.kind = kind;
    }
    draft.location = args.location;
    draft.responsible = args.responsible;
    draft.description = args.description;

    let draft = controller.draft().cloned().context("create modal not open")?;
    let event = controller.submit(draft).await?;

    println!(
        "{}",
        format!("Created: {} (id {})", event.title, event.id).green()
    );
    Ok(())
}
