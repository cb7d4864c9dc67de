use anyhow::Result;
use chrono::NaiveDateTime;
use owo_colors::OwoColorize;
use pawcal_core::commit::validate;
use pawcal_core::{CalendarCategory, Commit, EventRecord};

use crate::context::Context;
use crate::render::Render;

/// Dry-run a booking. With `id`, the span is checked as an edit of that
/// event so it doesn't count against itself.
pub fn run(ctx: &Context, start: NaiveDateTime, end: NaiveDateTime, id: Option<&str>) -> Result<()> {
    let store = ctx.scheduler.store();

    let mut candidate = match id.and_then(|id| store.get(id)) {
        Some(existing) => existing.clone(),
        None => EventRecord::new("(check)", start, end, CalendarCategory::Business),
    };
    candidate.start = start;
    candidate.end = end;

    match validate(&candidate, &store.events) {
        Commit::Rejected(reason) => {
            eprintln!("{}", reason.render());
            anyhow::bail!("Time span cannot be booked")
        }
        _ => {
            println!("{} {} - {}", "✓ Available".green(), start, end);
            Ok(())
        }
    }
}
