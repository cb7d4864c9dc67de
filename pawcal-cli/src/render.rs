//! Coloured terminal rendering for pawcal types.

use owo_colors::OwoColorize;
use pawcal_core::{CalendarCategory, EventRecord, Rejection};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for CalendarCategory {
    fn render(&self) -> String {
        let name = self.as_str();
        match self.color() {
            "error" => name.red().to_string(),
            "primary" => name.blue().to_string(),
            "warning" => name.yellow().to_string(),
            "success" => name.green().to_string(),
            _ => name.cyan().to_string(),
        }
    }
}

impl Render for EventRecord {
    fn render(&self) -> String {
        let time = if self.all_day {
            format!("{:>13}", "all-day")
        } else {
            format!("{} - {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
        };

        let mut line = format!(
            "  {} {} [{}] {}",
            time,
            self.title.bold(),
            self.calendar_category.render(),
            self.id.dimmed()
        );

        let locks: Vec<&str> = [
            (!self.editable).then_some("read-only"),
            (!self.draggable).then_some("pinned"),
            (!self.deletable).then_some("undeletable"),
        ]
        .into_iter()
        .flatten()
        .collect();

        if !locks.is_empty() {
            line.push_str(&format!(" {}", format!("({})", locks.join(", ")).dimmed()));
        }

        line
    }
}

impl Render for Rejection {
    fn render(&self) -> String {
        format!("{} {}", "✗".red(), self.to_string().red())
    }
}
