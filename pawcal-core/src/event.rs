//! Booking event types.
//!
//! An [`EventRecord`] is a single schedulable item on a store's calendar
//! (a grooming slot, a vet visit, a staff meeting). Times are naive:
//! everything is interpreted in the store's local wall-clock time.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PawcalError;

/// A calendar event owned by an [`EventStore`](crate::store::EventStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Opaque id, generated client-side when the caller doesn't supply one
    #[serde(default = "new_event_id")]
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,

    /// Display hint only; overlap checks still use `start`/`end`
    #[serde(default)]
    pub all_day: bool,

    // Capability flags, read by front ends to decide which interactions to offer
    #[serde(default = "default_true")]
    pub editable: bool,
    #[serde(default = "default_true")]
    pub deletable: bool,
    #[serde(default = "default_true")]
    pub draggable: bool,

    pub calendar_category: CalendarCategory,

    #[serde(default)]
    pub extended_props: ExtendedProps,
}

/// Free-form attributes carried alongside an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtendedProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Guest names or emails
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub guests: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Anything else the UI attached; kept for round-tripping
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn default_true() -> bool {
    true
}

/// Generate a fresh event id.
pub fn new_event_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl EventRecord {
    /// Create an event with a generated id and all capabilities enabled.
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        calendar_category: CalendarCategory,
    ) -> Self {
        EventRecord {
            id: new_event_id(),
            title: title.into(),
            start,
            end,
            all_day: false,
            editable: true,
            deletable: true,
            draggable: true,
            calendar_category,
            extended_props: ExtendedProps::default(),
        }
    }

    /// Calendar day the event starts on.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn has_valid_range(&self) -> bool {
        self.end >= self.start
    }

    /// Half-open overlap of `[start, end)` with `[slot_start, slot_end)`.
    pub fn overlaps(&self, slot_start: NaiveDateTime, slot_end: NaiveDateTime) -> bool {
        self.start < slot_end && self.end > slot_start
    }
}

/// Fixed set of calendars used for filtering and colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CalendarCategory {
    Personal,
    Business,
    Family,
    Holiday,
    #[serde(rename = "ETC")]
    Etc,
}

impl CalendarCategory {
    /// All categories, in display order.
    pub const ALL: [CalendarCategory; 5] = [
        CalendarCategory::Personal,
        CalendarCategory::Business,
        CalendarCategory::Family,
        CalendarCategory::Holiday,
        CalendarCategory::Etc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarCategory::Personal => "Personal",
            CalendarCategory::Business => "Business",
            CalendarCategory::Family => "Family",
            CalendarCategory::Holiday => "Holiday",
            CalendarCategory::Etc => "ETC",
        }
    }

    /// Theme colour token the admin UI paints this calendar with.
    pub fn color(&self) -> &'static str {
        match self {
            CalendarCategory::Personal => "error",
            CalendarCategory::Business => "primary",
            CalendarCategory::Family => "warning",
            CalendarCategory::Holiday => "success",
            CalendarCategory::Etc => "info",
        }
    }
}

impl fmt::Display for CalendarCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CalendarCategory {
    type Err = PawcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalendarCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PawcalError::UnknownCategory(s.to_string()))
    }
}

// Unknown names are rejected rather than mapped to a fallback
impl<'de> Deserialize<'de> for CalendarCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 6)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("family".parse::<CalendarCategory>().unwrap(), CalendarCategory::Family);
        assert_eq!("etc".parse::<CalendarCategory>().unwrap(), CalendarCategory::Etc);
        assert_eq!(" Holiday ".parse::<CalendarCategory>().unwrap(), CalendarCategory::Holiday);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = "Work".parse::<CalendarCategory>().unwrap_err();
        assert!(matches!(err, PawcalError::UnknownCategory(ref s) if s == "Work"));

        let json = r#"{"title":"x","start":"2025-01-06T09:00:00","end":"2025-01-06T10:00:00","calendarCategory":"Work"}"#;
        assert!(serde_json::from_str::<EventRecord>(json).is_err());
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let json = r#"{
            "title": "Nail trim",
            "start": "2025-01-06T09:00:00",
            "end": "2025-01-06T09:30:00",
            "calendarCategory": "ETC",
            "extendedProps": { "description": "Max, the beagle", "petId": 42 }
        }"#;

        let event: EventRecord = serde_json::from_str(json).unwrap();

        assert!(!event.id.is_empty());
        assert!(event.editable && event.deletable && event.draggable);
        assert!(!event.all_day);
        assert_eq!(event.calendar_category, CalendarCategory::Etc);
        assert_eq!(event.extended_props.description.as_deref(), Some("Max, the beagle"));
        assert_eq!(event.extended_props.extra["petId"], serde_json::json!(42));

        let back = serde_json::to_value(&event).unwrap();
        assert_eq!(back["calendarCategory"], "ETC");
        assert_eq!(back["extendedProps"]["petId"], 42);
    }

    #[test]
    fn test_overlap_is_half_open() {
        let event = EventRecord::new("Bath", at(9, 0), at(10, 0), CalendarCategory::Business);

        assert!(event.overlaps(at(9, 30), at(10, 30)));
        assert!(!event.overlaps(at(10, 0), at(11, 0)));
        assert!(!event.overlaps(at(8, 0), at(9, 0)));
    }

    #[test]
    fn test_valid_range() {
        let mut event = EventRecord::new("Walk", at(9, 0), at(9, 0), CalendarCategory::Personal);
        assert!(event.has_valid_range());

        event.end = at(8, 59);
        assert!(!event.has_valid_range());
    }
}
