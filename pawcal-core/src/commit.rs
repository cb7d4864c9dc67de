//! Validated write path for the event store.
//!
//! Front ends never dispatch reducer actions for event changes directly.
//! They go through [`Scheduler`], which checks the change first and only
//! applies it when it is accepted. A rejected change leaves the store
//! exactly as it was.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::event::{CalendarCategory, EventRecord};
use crate::overlap::{SlotConflict, find_conflict};
use crate::reducer::{CalendarAction, reduce};
use crate::store::EventStore;

/// Outcome of a create/edit/move/delete request.
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    /// Applied. Holds the event as stored (or as removed, for deletes).
    Accepted(EventRecord),
    /// Refused; the store is untouched.
    Rejected(Rejection),
    /// The target id is not in the store, so there was nothing to do.
    Unchanged,
}

impl Commit {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Commit::Accepted(_))
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Commit::Rejected(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Why a change was refused.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    Overlap(SlotConflict),
    NotEditable,
    NotDraggable,
    NotDeletable,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rejection::InvalidRange { start, end } => {
                write!(f, "Event ends ({}) before it starts ({})", end, start)
            }
            Rejection::Overlap(conflict) => write!(
                f,
                "The {:02}:00 slot on {} is fully booked ({} events)",
                conflict.hour,
                conflict.slot_start.date(),
                conflict.count
            ),
            Rejection::NotEditable => write!(f, "Event is not editable"),
            Rejection::NotDraggable => write!(f, "Event cannot be moved"),
            Rejection::NotDeletable => write!(f, "Event cannot be deleted"),
        }
    }
}

/// Check a candidate against the events it would be committed alongside.
pub fn validate(candidate: &EventRecord, existing: &[EventRecord]) -> Commit {
    if !candidate.has_valid_range() {
        return Commit::Rejected(Rejection::InvalidRange {
            start: candidate.start,
            end: candidate.end,
        });
    }

    match find_conflict(candidate, existing) {
        Some(conflict) => Commit::Rejected(Rejection::Overlap(conflict)),
        None => Commit::Accepted(candidate.clone()),
    }
}

/// Owns an [`EventStore`] and applies changes only after they validate.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    store: EventStore,
}

impl Scheduler {
    pub fn new(store: EventStore) -> Self {
        Scheduler { store }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn into_store(self) -> EventStore {
        self.store
    }

    fn dispatch(&mut self, action: CalendarAction) {
        self.store = reduce(&self.store, action);
    }

    fn reject(&self, id: &str, reason: Rejection) -> Commit {
        warn!(event_id = %id, %reason, "Rejected calendar change");
        Commit::Rejected(reason)
    }

    /// Add a new event.
    pub fn create(&mut self, event: EventRecord) -> Commit {
        match validate(&event, &self.store.events) {
            Commit::Accepted(event) => {
                info!(event_id = %event.id, title = %event.title, "Created event");
                self.dispatch(CalendarAction::Add(event.clone()));
                Commit::Accepted(event)
            }
            Commit::Rejected(reason) => self.reject(&event.id, reason),
            Commit::Unchanged => Commit::Unchanged,
        }
    }

    /// Replace an existing event with `event` (matched by id).
    pub fn edit(&mut self, event: EventRecord) -> Commit {
        let Some(current) = self.store.get(&event.id) else {
            debug!(event_id = %event.id, "Edit for unknown event ignored");
            return Commit::Unchanged;
        };

        if !current.editable {
            return self.reject(&event.id, Rejection::NotEditable);
        }

        // Capabilities are owned by the store, not by whoever sends the edit
        let mut event = event;
        event.editable = current.editable;
        event.deletable = current.deletable;
        event.draggable = current.draggable;

        self.apply_update(event)
    }

    /// Drag or resize an event to a new time span.
    pub fn move_event(&mut self, id: &str, start: NaiveDateTime, end: NaiveDateTime) -> Commit {
        let Some(current) = self.store.get(id) else {
            debug!(event_id = %id, "Move for unknown event ignored");
            return Commit::Unchanged;
        };

        if !current.draggable {
            return self.reject(id, Rejection::NotDraggable);
        }
        if !current.editable {
            return self.reject(id, Rejection::NotEditable);
        }

        let mut moved = current.clone();
        moved.start = start;
        moved.end = end;

        self.apply_update(moved)
    }

    fn apply_update(&mut self, event: EventRecord) -> Commit {
        match validate(&event, &self.store.events) {
            Commit::Accepted(event) => {
                info!(event_id = %event.id, start = %event.start, end = %event.end, "Updated event");
                self.dispatch(CalendarAction::Update(event.clone()));
                Commit::Accepted(event)
            }
            Commit::Rejected(reason) => self.reject(&event.id, reason),
            Commit::Unchanged => Commit::Unchanged,
        }
    }

    /// Delete an event by id.
    pub fn remove(&mut self, id: &str) -> Commit {
        let Some(current) = self.store.get(id).cloned() else {
            debug!(event_id = %id, "Delete for unknown event ignored");
            return Commit::Unchanged;
        };

        if !current.deletable {
            return self.reject(id, Rejection::NotDeletable);
        }

        info!(event_id = %id, "Deleted event");
        self.dispatch(CalendarAction::Delete(id.to_string()));
        Commit::Accepted(current)
    }

    pub fn clear_selection(&mut self) {
        self.dispatch(CalendarAction::SelectEvent(None));
    }

    /// Select the stored event with `id`. Returns false (and leaves the
    /// selection alone) when there is no such event.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        self.dispatch(CalendarAction::SelectEvent(Some(id.to_string())));
        true
    }

    pub fn toggle_calendar(&mut self, category: CalendarCategory) {
        self.dispatch(CalendarAction::ToggleCalendar(category));
    }

    pub fn set_all_calendars(&mut self, all: bool) {
        self.dispatch(CalendarAction::SetAllCalendars(all));
    }
}
