mod commands;
mod context;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pawcal_core::CalendarCategory;
use tracing_subscriber::EnvFilter;

use crate::context::Context;
use crate::utils::datetime::{parse_date, parse_datetime};

#[derive(Parser)]
#[command(name = "pawcal")]
#[command(about = "Manage store bookings: add, move and check events against the hourly capacity")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List visible events
    List {
        /// Only this day (YYYY-MM-DD)
        #[arg(long, conflicts_with = "week")]
        date: Option<String>,

        /// The week containing this day (YYYY-MM-DD)
        #[arg(long)]
        week: Option<String>,
    },
    /// Book a new event
    Add {
        title: String,

        /// Start date/time (e.g., "2025-03-20T15:00")
        #[arg(short, long)]
        start: String,

        /// End date/time (e.g., "2025-03-20T16:00")
        #[arg(short, long)]
        end: String,

        /// Personal, Business, Family, Holiday or ETC
        #[arg(short, long, default_value = "Business")]
        category: String,

        #[arg(long)]
        all_day: bool,

        #[arg(short, long)]
        description: Option<String>,

        /// Guest name or email (repeatable)
        #[arg(short, long = "guest")]
        guests: Vec<String>,
    },
    /// Change fields of an existing event
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long)]
        end: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        description: Option<String>,
    },
    /// Move or resize an event
    Move {
        id: String,

        #[arg(short, long)]
        start: String,

        #[arg(short, long)]
        end: String,
    },
    /// Delete an event
    Delete { id: String },
    /// Select an event, or clear the selection when no id is given
    Select { id: Option<String> },
    /// Show or hide one calendar
    Toggle { category: String },
    /// Show or hide all calendars
    Filters {
        #[arg(long, conflicts_with = "none", required_unless_present = "none")]
        all: bool,

        #[arg(long)]
        none: bool,
    },
    /// Check whether a time span could be booked, without booking it
    Check {
        #[arg(short, long)]
        start: String,

        #[arg(short, long)]
        end: String,

        /// Check as an edit of this event
        #[arg(long)]
        id: Option<String>,
    },
    /// Save a token issued by the auth service
    Login {
        #[arg(long)]
        token: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        user_id: String,

        #[arg(long)]
        name: Option<String>,
    },
    /// Forget the saved session
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut ctx = Context::load()?;

    match cli.command {
        Commands::List { date, week } => {
            let date = date.as_deref().map(parse_date).transpose()?;
            let week = week.as_deref().map(parse_date).transpose()?;
            commands::list::run(&mut ctx, date, week)
        }
        Commands::Add {
            title,
            start,
            end,
            category,
            all_day,
            description,
            guests,
        } => {
            let draft = commands::add::Draft {
                title,
                start: parse_datetime(&start)?,
                end: parse_datetime(&end)?,
                category: category.parse()?,
                all_day,
                description,
                guests,
            };
            commands::add::run(&mut ctx, draft).await
        }
        Commands::Edit {
            id,
            title,
            start,
            end,
            category,
            description,
        } => {
            let changes = commands::edit::Changes {
                title,
                start: start.as_deref().map(parse_datetime).transpose()?,
                end: end.as_deref().map(parse_datetime).transpose()?,
                category: category.as_deref().map(str::parse::<CalendarCategory>).transpose()?,
                description,
            };
            commands::edit::run(&mut ctx, &id, changes).await
        }
        Commands::Move { id, start, end } => {
            commands::move_event::run(&mut ctx, &id, parse_datetime(&start)?, parse_datetime(&end)?)
                .await
        }
        Commands::Delete { id } => commands::delete::run(&mut ctx, &id).await,
        Commands::Select { id } => commands::select::run(&mut ctx, id.as_deref()),
        Commands::Toggle { category } => commands::filters::toggle(&mut ctx, category.parse()?),
        Commands::Filters { all, none } => commands::filters::set_all(&mut ctx, all && !none),
        Commands::Check { start, end, id } => {
            commands::check::run(&ctx, parse_datetime(&start)?, parse_datetime(&end)?, id.as_deref())
        }
        Commands::Login {
            token,
            email,
            user_id,
            name,
        } => commands::auth::login(&mut ctx, token, user_id, email, name),
        Commands::Logout => commands::auth::logout(&mut ctx),
    }
}
