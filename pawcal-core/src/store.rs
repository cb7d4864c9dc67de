//! In-memory event store consumed by calendar views.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::event::{CalendarCategory, EventRecord};

/// Ordered events plus the current selection and active calendar filters.
///
/// The store is only changed through [`crate::reducer::reduce`]; every
/// action produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStore {
    /// Insertion order
    pub events: Vec<EventRecord>,
    /// Id of the selected event
    pub selected: Option<String>,
    pub filters: BTreeSet<CalendarCategory>,
}

impl Default for EventStore {
    /// Empty store with every calendar visible.
    fn default() -> Self {
        EventStore {
            events: Vec::new(),
            selected: None,
            filters: CalendarCategory::ALL.into_iter().collect(),
        }
    }
}

impl EventStore {
    pub fn with_events(events: Vec<EventRecord>) -> Self {
        EventStore {
            events,
            ..Default::default()
        }
    }

    pub fn get(&self, id: &str) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == id)
    }

    /// The selected event, looked up fresh so edits show through.
    pub fn selected_event(&self) -> Option<&EventRecord> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|e| e.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn is_filter_active(&self, category: CalendarCategory) -> bool {
        self.filters.contains(&category)
    }
}
