use anyhow::Result;
use owo_colors::OwoColorize;

use crate::context::Context;
use crate::render::Render;

pub fn run(ctx: &mut Context, id: Option<&str>) -> Result<()> {
    match id {
        Some(id) => {
            if !ctx.scheduler.select_by_id(id) {
                anyhow::bail!("No event with id '{}'", id);
            }
        }
        None => ctx.scheduler.clear_selection(),
    }

    ctx.save()?;

    match ctx.scheduler.store().selected_event() {
        Some(event) => println!("{}{}", "Selected".bold(), event.render()),
        None => println!("{}", "Selection cleared".dimmed()),
    }
    Ok(())
}
