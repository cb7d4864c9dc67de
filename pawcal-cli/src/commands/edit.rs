use anyhow::Result;
use chrono::NaiveDateTime;
use owo_colors::OwoColorize;
use pawcal_core::CalendarCategory;

use crate::commands::settle;
use crate::context::{Context, Mirror};
use crate::render::Render;

/// Fields to overwrite; `None` keeps the current value.
pub struct Changes {
    pub title: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub category: Option<CalendarCategory>,
    pub description: Option<String>,
}

pub async fn run(ctx: &mut Context, id: &str, changes: Changes) -> Result<()> {
    let Some(mut event) = ctx.scheduler.store().get(id).cloned() else {
        println!("{}", format!("No event with id '{}'", id).dimmed());
        return Ok(());
    };

    if let Some(title) = changes.title {
        event.title = title;
    }
    if let Some(start) = changes.start {
        event.start = start;
    }
    if let Some(end) = changes.end {
        event.end = end;
    }
    if let Some(category) = changes.category {
        event.calendar_category = category;
    }
    if let Some(description) = changes.description {
        event.extended_props.description = Some(description);
    }

    let Some(updated) = settle(ctx.scheduler.edit(event), id)? else {
        return Ok(());
    };

    ctx.save()?;
    ctx.mirror(Mirror::Updated(&updated)).await?;

    println!("{} {}", "Updated".yellow(), updated.render());
    Ok(())
}
