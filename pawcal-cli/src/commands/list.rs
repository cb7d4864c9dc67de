use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use pawcal_core::EventRecord;
use pawcal_core::capability::{CalendarApi, StoreCalendar};
use pawcal_core::view::{events_on, visible_events};

use crate::context::Context;
use crate::render::Render;

pub fn run(ctx: &mut Context, date: Option<NaiveDate>, week: Option<NaiveDate>) -> Result<()> {
    let mut events: Vec<EventRecord> = match (date, week) {
        (Some(date), _) => events_on(ctx.scheduler.store(), date).into_iter().cloned().collect(),
        (None, Some(week)) => StoreCalendar::new(&mut ctx.scheduler, week).refetch_events(),
        (None, None) => visible_events(ctx.scheduler.store()).into_iter().cloned().collect(),
    };

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    events.sort_by_key(|e| e.start);

    let selected = ctx.scheduler.store().selected.clone();
    let mut current_date: Option<NaiveDate> = None;

    for event in &events {
        if current_date != Some(event.date()) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", event.date().format("%a %b %-d, %Y").bold());
            current_date = Some(event.date());
        }

        let marker = if selected.as_deref() == Some(event.id.as_str()) {
            "▶".cyan().to_string()
        } else {
            " ".to_string()
        };
        println!("{}{}", marker, event.render());
    }

    Ok(())
}
