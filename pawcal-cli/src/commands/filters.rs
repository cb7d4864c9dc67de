use anyhow::Result;
use owo_colors::OwoColorize;
use pawcal_core::CalendarCategory;

use crate::context::Context;
use crate::render::Render;

pub fn toggle(ctx: &mut Context, category: CalendarCategory) -> Result<()> {
    ctx.scheduler.toggle_calendar(category);
    ctx.save()?;
    print_filters(ctx);
    Ok(())
}

pub fn set_all(ctx: &mut Context, all: bool) -> Result<()> {
    ctx.scheduler.set_all_calendars(all);
    ctx.save()?;
    print_filters(ctx);
    Ok(())
}

fn print_filters(ctx: &Context) {
    let store = ctx.scheduler.store();
    for category in CalendarCategory::ALL {
        if store.is_filter_active(category) {
            println!("  {} {}", "●".green(), category.render());
        } else {
            println!("  {} {}", "○".dimmed(), category.as_str().dimmed());
        }
    }
}
