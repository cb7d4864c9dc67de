use anyhow::Result;
use chrono::NaiveDateTime;
use owo_colors::OwoColorize;
use pawcal_core::{CalendarCategory, EventRecord};

use crate::commands::settle;
use crate::context::{Context, Mirror};
use crate::render::Render;

pub struct Draft {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub category: CalendarCategory,
    pub all_day: bool,
    pub description: Option<String>,
    pub guests: Vec<String>,
}

pub async fn run(ctx: &mut Context, draft: Draft) -> Result<()> {
    let mut event = EventRecord::new(draft.title, draft.start, draft.end, draft.category);
    event.all_day = draft.all_day;
    event.extended_props.description = draft.description;
    event.extended_props.guests = draft.guests;

    let id = event.id.clone();
    let Some(created) = settle(ctx.scheduler.create(event), &id)? else {
        return Ok(());
    };

    ctx.save()?;
    ctx.mirror(Mirror::Created(&created)).await?;

    println!("{} {}", "Booked".green(), created.render());
    Ok(())
}
