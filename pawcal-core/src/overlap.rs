//! Per-hour booking capacity check.
//!
//! A store can staff at most [`MAX_EVENTS_PER_SLOT`] events in any
//! clock-hour of a day. Before an event is created, edited or dragged, the
//! candidate is counted against every hour it touches on its start day.
//!
//! Hours come from the hour-of-day of `start` and `end`, not the full
//! duration. An event that runs past midnight only has its start day
//! checked and, because its end hour is smaller than its start hour, no
//! slots are counted at all.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::event::EventRecord;

pub const MAX_EVENTS_PER_SLOT: usize = 2;

/// The first hour slot that would be over capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotConflict {
    pub hour: u32,
    /// Events in the slot, candidate included
    pub count: usize,
    pub slot_start: NaiveDateTime,
    pub slot_end: NaiveDateTime,
}

/// Whether committing `candidate` would overbook any hour of its day.
pub fn has_conflict(candidate: &EventRecord, existing: &[EventRecord]) -> bool {
    find_conflict(candidate, existing).is_some()
}

/// Find the first overbooked hour for `candidate`, if any.
///
/// Events sharing the candidate's id are skipped so an edit never collides
/// with its own previous version.
pub fn find_conflict(candidate: &EventRecord, existing: &[EventRecord]) -> Option<SlotConflict> {
    let day = candidate.date();

    let same_day: Vec<&EventRecord> = existing
        .iter()
        .filter(|e| e.date() == day && e.id != candidate.id)
        .collect();

    let start_hour = candidate.start.hour();
    let end_hour = candidate.end.hour();

    // The end hour is only occupied when the event runs into it; the
    // per-slot overlap test below drops it for events ending on the hour.
    for hour in start_hour..=end_hour {
        let slot_start = day.and_time(NaiveTime::from_hms_opt(hour, 0, 0)?);
        let slot_end = slot_start + Duration::hours(1);

        // Skip rather than count from 0: an end-hour slot the candidate never
        // reaches must not reject it for events it doesn't meet.
        if !candidate.overlaps(slot_start, slot_end) {
            continue;
        }

        let count = 1 + same_day
            .iter()
            .filter(|e| e.overlaps(slot_start, slot_end))
            .count();

        if count > MAX_EVENTS_PER_SLOT {
            return Some(SlotConflict {
                hour,
                count,
                slot_start,
                slot_end,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::CalendarCategory;
    use chrono::NaiveDate;

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn event(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> EventRecord {
        let mut e = EventRecord::new(id, start, end, CalendarCategory::Business);
        e.id = id.to_string();
        e
    }

    fn scenario_store() -> Vec<EventRecord> {
        vec![
            event("a", at(6, 9, 0), at(6, 10, 0)),
            event("b", at(6, 9, 30), at(6, 10, 30)),
        ]
    }

    #[test]
    fn test_third_booking_in_hour_is_rejected() {
        let c = event("c", at(6, 9, 15), at(6, 9, 45));

        let conflict = find_conflict(&c, &scenario_store()).expect("hour 9 is full");
        assert_eq!(conflict.hour, 9);
        assert_eq!(conflict.count, 3);
        assert_eq!(conflict.slot_start, at(6, 9, 0));
        assert_eq!(conflict.slot_end, at(6, 10, 0));
    }

    #[test]
    fn test_free_hour_is_accepted() {
        let d = event("d", at(6, 11, 0), at(6, 12, 0));
        assert!(!has_conflict(&d, &scenario_store()));
    }

    #[test]
    fn test_back_to_back_events_do_not_share_a_slot() {
        let existing = vec![
            event("a", at(6, 9, 0), at(6, 10, 0)),
            event("b", at(6, 9, 0), at(6, 10, 0)),
        ];

        // Ends exactly when the next hour starts, and starts exactly when the
        // previous events end: neither touches the full hour.
        let before = event("before", at(6, 8, 0), at(6, 9, 0));
        let after = event("after", at(6, 10, 0), at(6, 11, 0));

        assert!(!has_conflict(&before, &existing));
        assert!(!has_conflict(&after, &existing));
    }

    #[test]
    fn test_conflict_reported_at_the_hour_reaching_three() {
        let existing = vec![
            event("a", at(6, 9, 0), at(6, 10, 0)),
            event("b", at(6, 10, 0), at(6, 11, 0)),
            event("x", at(6, 10, 0), at(6, 11, 0)),
        ];
        let candidate = event("c", at(6, 9, 30), at(6, 10, 30));

        let conflict = find_conflict(&candidate, &existing).unwrap();
        assert_eq!(conflict.hour, 10);
        assert_eq!(conflict.count, 3);
    }

    #[test]
    fn test_two_per_hour_is_allowed() {
        let existing = vec![
            event("a", at(6, 9, 0), at(6, 10, 0)),
            event("b", at(6, 10, 0), at(6, 11, 0)),
        ];
        let candidate = event("c", at(6, 9, 30), at(6, 10, 30));

        assert!(!has_conflict(&candidate, &existing));
    }

    #[test]
    fn test_other_days_never_conflict() {
        let existing = vec![
            event("a", at(7, 9, 0), at(7, 10, 0)),
            event("b", at(7, 9, 0), at(7, 10, 0)),
            event("x", at(7, 9, 0), at(7, 10, 0)),
        ];
        let candidate = event("c", at(6, 9, 0), at(6, 10, 0));

        assert!(!has_conflict(&candidate, &existing));
    }

    #[test]
    fn test_event_does_not_conflict_with_its_previous_version() {
        let existing = scenario_store();
        let unchanged = existing[1].clone();
        assert!(!has_conflict(&unchanged, &existing));

        // Counting c's old copy would make hour 9 hold three events
        let crowded = vec![
            event("a", at(6, 9, 0), at(6, 10, 0)),
            event("c", at(6, 9, 0), at(6, 9, 30)),
        ];
        let moved = event("c", at(6, 9, 10), at(6, 9, 40));
        assert!(!has_conflict(&moved, &crowded));
    }

    #[test]
    fn test_overnight_event_counts_no_slots() {
        let existing = vec![
            event("a", at(6, 22, 0), at(6, 23, 0)),
            event("b", at(6, 22, 0), at(6, 23, 0)),
        ];
        let overnight = event("c", at(6, 22, 0), at(7, 1, 0));

        assert!(!has_conflict(&overnight, &existing));
    }

    #[test]
    fn test_late_evening_slot_wraps_to_next_day() {
        let existing = vec![
            event("a", at(6, 23, 0), at(6, 23, 59)),
            event("b", at(6, 23, 15), at(6, 23, 45)),
        ];
        let candidate = event("c", at(6, 23, 30), at(6, 23, 50));

        let conflict = find_conflict(&candidate, &existing).unwrap();
        assert_eq!(conflict.hour, 23);
        assert_eq!(conflict.slot_end, at(7, 0, 0));
    }
}
