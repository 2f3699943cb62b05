mod commands;
mod dates;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use parish_core::config::ParishConfig;
use parish_core::store::{EventStore, JsonFileStore};
use parish_core::Event;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "parish")]
#[command(about = "Browse the parish events calendar")]
struct Cli {
    /// Read events from this JSON file instead of the configured one
    #[arg(long, global = true)]
    events: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events happening on a day
    On {
        /// YYYY-MM-DD, or something like "today", "next sunday", "dec 24"
        date: String,
    },
    /// Show a month calendar with event days highlighted
    Month {
        /// YYYY-MM (defaults to the current month)
        month: Option<String>,
    },
    /// List events for the coming days
    Upcoming {
        /// Number of days to look ahead, today included
        #[arg(short, long, default_value_t = 14)]
        days: u32,
    },
    /// Show the resolved configuration
    Config,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = ParishConfig::load()?;
    let today = Local::now().date_naive();

    match cli.command {
        Commands::On { date } => {
            let date = dates::parse_day(&date, today)?;
            let events = load_events(&config, cli.events)?;
            commands::on::run(&events, date, today)
        }
        Commands::Month { month } => {
            let events = load_events(&config, cli.events)?;
            commands::month::run(&events, month.as_deref(), today)
        }
        Commands::Upcoming { days } => {
            let events = load_events(&config, cli.events)?;
            commands::upcoming::run(&events, today, days)
        }
        Commands::Config => commands::config::run(&config),
    }
}

/// Log to stderr, quiet unless RUST_LOG says otherwise.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_events(config: &ParishConfig, path_override: Option<PathBuf>) -> Result<Vec<Event>> {
    let path = path_override.unwrap_or_else(|| config.events_path());
    let store = JsonFileStore::new(path);

    let events = store.published_events()?;
    tracing::info!(count = events.len(), path = %store.path().display(), "published events");

    if events.is_empty() {
        anyhow::bail!(
            "No published events found in {}.\n\n\
            Point parish at an export of the events table with:\n  \
            parish --events <file.json> <command>\n\n\
            or set events_file in {}",
            store.path().display(),
            ParishConfig::config_path()?.display()
        );
    }

    Ok(events)
}

