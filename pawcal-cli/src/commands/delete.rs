use anyhow::Result;
use owo_colors::OwoColorize;

use crate::commands::settle;
use crate::context::{Context, Mirror};
use crate::render::Render;

pub async fn run(ctx: &mut Context, id: &str) -> Result<()> {
    let Some(removed) = settle(ctx.scheduler.remove(id), id)? else {
        return Ok(());
    };

    ctx.save()?;
    ctx.mirror(Mirror::Deleted(&removed.id)).await?;

    println!("{} {}", "Deleted".red(), removed.render());
    Ok(())
}
