//! Read-side projections over an [`EventStore`].
//!
//! These are recomputed on every call. Stores hold tens to low hundreds of
//! events, so there is nothing to cache.

use chrono::{Datelike, Duration, NaiveDate};

use crate::event::EventRecord;
use crate::store::EventStore;

/// Events whose calendar is currently switched on, in store order.
pub fn visible_events(store: &EventStore) -> Vec<&EventRecord> {
    store
        .events
        .iter()
        .filter(|e| store.filters.contains(&e.calendar_category))
        .collect()
}

/// Visible events starting on `date`.
pub fn events_on(store: &EventStore, date: NaiveDate) -> Vec<&EventRecord> {
    visible_events(store)
        .into_iter()
        .filter(|e| e.date() == date)
        .collect()
}

/// Visible events starting in the Monday-based week containing `date`.
pub fn events_in_week(store: &EventStore, date: NaiveDate) -> Vec<&EventRecord> {
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    let next_monday = monday + Duration::days(7);

    visible_events(store)
        .into_iter()
        .filter(|e| e.date() >= monday && e.date() < next_monday)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::CalendarCategory;

    fn event(title: &str, day: u32, category: CalendarCategory) -> EventRecord {
        let date = NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
        EventRecord::new(
            title,
            date.and_hms_opt(9, 0, 0).unwrap(),
            date.and_hms_opt(10, 0, 0).unwrap(),
            category,
        )
    }

    fn titles(events: Vec<&EventRecord>) -> Vec<&str> {
        events.into_iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_visible_events_respects_filters_and_order() {
        let mut store = EventStore::with_events(vec![
            event("groom", 6, CalendarCategory::Business),
            event("birthday", 6, CalendarCategory::Family),
            event("vet", 7, CalendarCategory::Business),
        ]);
        assert_eq!(titles(visible_events(&store)), vec!["groom", "birthday", "vet"]);

        store.filters.remove(&CalendarCategory::Business);
        assert_eq!(titles(visible_events(&store)), vec!["birthday"]);

        store.filters.clear();
        assert!(visible_events(&store).is_empty());
    }

    #[test]
    fn test_events_on_and_in_week() {
        // 2025-01-06 is a Monday
        let store = EventStore::with_events(vec![
            event("sun", 5, CalendarCategory::Personal),
            event("mon", 6, CalendarCategory::Personal),
            event("sun-after", 12, CalendarCategory::Personal),
            event("next-mon", 13, CalendarCategory::Personal),
        ]);

        let wed = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
        assert_eq!(titles(events_in_week(&store, wed)), vec!["mon", "sun-after"]);

        let mon = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        assert_eq!(titles(events_on(&store, mon)), vec!["mon"]);
    }
}
