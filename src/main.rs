mod commands;
mod config;
mod render;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use evcal_core::date::parse_ymd;
use evcal_core::search::EventFilter;
use evcal_core::Color;

use crate::commands::add::AddArgs;
use crate::config::Config;
use crate::store::EventStore;

#[derive(Parser)]
#[command(name = "evcal")]
#[command(about = "Browse a shared all-day event calendar and export it to ICS")]
struct Cli {
    /// Path to the JSON event store (overrides the configured store)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid
    Month {
        /// Anchor date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the week containing a date
    Week {
        /// Anchor date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the events of one day
    Day {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show upcoming events grouped by start date
    Agenda {
        /// Show events starting on or after this date (defaults to today)
        #[arg(long)]
        from: Option<String>,
    },
    /// Show the next events that have not ended yet
    Upcoming {
        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },
    /// Search events by text, color, or date range
    Search {
        /// Free-text term matched against title, location and description
        term: Option<String>,

        /// Keep only events with this palette color
        #[arg(long)]
        color: Option<String>,

        /// Keep only events overlapping this range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,
    },
    /// Add an event to the store
    Add {
        title: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: String,

        /// End date (YYYY-MM-DD), defaults to the start date
        #[arg(long)]
        end: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Palette color: blue, red, green, yellow, purple or indigo
        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        ticket_url: Option<String>,
    },
    /// Export the calendar as an iCalendar file
    Export {
        #[arg(short, long, default_value = "calendar.ics")]
        output: PathBuf,

        /// Calendar name (overrides the configured name)
        #[arg(long)]
        name: Option<String>,

        /// Print the document instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Import events from an iCalendar file
    Import { file: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let store_path = match cli.store {
        Some(path) => path,
        None => config.store_path()?,
    };
    let mut store = EventStore::load(&store_path)?;

    let today = Local::now().date_naive();

    match cli.command {
        Commands::Month { date } => commands::month::run(store.events(), anchor(date, today)?, today),
        Commands::Week { date } => commands::week::run(store.events(), anchor(date, today)?, today),
        Commands::Day { date } => commands::day::run(store.events(), anchor(date, today)?, today),
        Commands::Agenda { from } => commands::agenda::run(store.events(), anchor(from, today)?, today),
        Commands::Upcoming { limit } => commands::upcoming::run(store.events(), today, limit),
        Commands::Search {
            term,
            color,
            from,
            to,
        } => {
            let filter = EventFilter {
                term,
                color: color
                    .map(|c| c.parse::<Color>())
                    .transpose()
                    .map_err(|e| anyhow::anyhow!(e))?,
                from: from.map(|s| parse_ymd(&s)).transpose()?,
                to: to.map(|s| parse_ymd(&s)).transpose()?,
            };
            commands::search::run(store.events(), filter, today)
        }
        Commands::Add {
            title,
            start,
            end,
            location,
            description,
            color,
            ticket_url,
        } => commands::add::run(
            &mut store,
            AddArgs {
                title,
                start,
                end,
                location,
                description,
                color,
                ticket_url,
            },
        ),
        Commands::Export {
            output,
            name,
            stdout,
        } => {
            let calendar_name = name.unwrap_or(config.calendar_name);
            commands::export::run(store.events(), &calendar_name, &output, stdout)
        }
        Commands::Import { file } => commands::import::run(&mut store, &file),
    }
}

/// Resolve an optional YYYY-MM-DD argument, defaulting to today.
///
/// "Today" always comes from local calendar fields, never a UTC
/// conversion, so the view anchor matches the user's wall clock.
fn anchor(date: Option<String>, today: NaiveDate) -> Result<NaiveDate> {
    match date {
        Some(s) => Ok(parse_ymd(&s)?),
        None => Ok(today),
    }
}
