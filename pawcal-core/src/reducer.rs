//! Pure state transitions for the event store.

use tracing::debug;

use crate::event::{CalendarCategory, EventRecord};
use crate::store::EventStore;

/// Everything a calendar view can ask the store to do.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarAction {
    /// Append. Ids are not checked for duplicates.
    Add(EventRecord),
    /// Replace the record with the same id. No-op when absent.
    Update(EventRecord),
    /// Remove by id. No-op when absent.
    Delete(String),
    /// Select by id, or clear with `None`
    SelectEvent(Option<String>),
    ToggleCalendar(CalendarCategory),
    SetAllCalendars(bool),
}

impl CalendarAction {
    pub fn name(&self) -> &'static str {
        match self {
            CalendarAction::Add(_) => "add",
            CalendarAction::Update(_) => "update",
            CalendarAction::Delete(_) => "delete",
            CalendarAction::SelectEvent(_) => "select_event",
            CalendarAction::ToggleCalendar(_) => "toggle_calendar",
            CalendarAction::SetAllCalendars(_) => "set_all_calendars",
        }
    }
}

/// Compute the next store state. Never fails and never touches `state`.
pub fn reduce(state: &EventStore, action: CalendarAction) -> EventStore {
    debug!(action = action.name(), events = state.len(), "Reducing calendar action");

    let mut next = state.clone();

    match action {
        CalendarAction::Add(event) => {
            next.events.push(event);
        }
        CalendarAction::Update(event) => {
            if let Some(slot) = next.events.iter_mut().find(|e| e.id == event.id) {
                *slot = event;
            }
        }
        CalendarAction::Delete(id) => {
            next.events.retain(|e| e.id != id);
            if next.selected.as_deref() == Some(id.as_str()) {
                next.selected = None;
            }
        }
        CalendarAction::SelectEvent(id) => {
            next.selected = id;
        }
        CalendarAction::ToggleCalendar(category) => {
            if !next.filters.remove(&category) {
                next.filters.insert(category);
            }
        }
        CalendarAction::SetAllCalendars(all) => {
            next.filters = if all {
                CalendarCategory::ALL.into_iter().collect()
            } else {
                Default::default()
            };
        }
    }

    next
}
