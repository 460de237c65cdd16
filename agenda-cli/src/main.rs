mod client;
mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use client::RestStore;
use config::Config;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Browse and manage your academic calendar from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month view
    Month {
        /// Anchor date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show one week
    Week {
        /// Anchor date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show a single day
    Day {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List the next events of the current month
    Upcoming {
        /// Maximum number of events to show
        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },
    /// Create an event
    New(commands::new::NewArgs),
    /// Edit an existing event
    Edit(commands::edit::EditArgs),
    /// Delete an event
    Delete {
        /// Event id
        id: u64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let store = RestStore::new(&config);
    let owner = config.user_id;

    match cli.command {
        Commands::Month { date } => commands::month::run(store, owner, date).await,
        Commands::Week { date } => commands::week::run(store, owner, date).await,
        Commands::Day { date } => commands::day::run(store, owner, date).await,
        Commands::Upcoming { limit } => commands::upcoming::run(store, owner, limit).await,
        Commands::New(args) => commands::new::run(store, owner, args).await,
        Commands::Edit(args) => commands::edit::run(store, owner, args).await,
        Commands::Delete { id, yes } => commands::delete::run(store, owner, id, yes).await,
    }
}
