use anyhow::Result;
use chrono::NaiveDateTime;
use owo_colors::OwoColorize;

use crate::commands::settle;
use crate::context::{Context, Mirror};
use crate::render::Render;

pub async fn run(ctx: &mut Context, id: &str, start: NaiveDateTime, end: NaiveDateTime) -> Result<()> {
    let Some(moved) = settle(ctx.scheduler.move_event(id, start, end), id)? else {
        return Ok(());
    };

    ctx.save()?;
    ctx.mirror(Mirror::Updated(&moved)).await?;

    println!("{} {}", "Moved".yellow(), moved.render());
    Ok(())
}
