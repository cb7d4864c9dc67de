//! The calendar operations a view actually needs.
//!
//! Views talk to a [`CalendarApi`] instead of holding a handle to a
//! particular calendar widget. [`StoreCalendar`] implements it on top of a
//! [`Scheduler`].

use chrono::NaiveDate;

use crate::commit::{Commit, Scheduler};
use crate::event::EventRecord;
use crate::view::events_in_week;

pub trait CalendarApi {
    /// Move the view to the week containing `date`.
    fn goto_date(&mut self, date: NaiveDate);

    fn current_date(&self) -> NaiveDate;

    /// Events the view should render right now.
    fn refetch_events(&self) -> Vec<EventRecord>;

    /// Remove an event. Returns true when it was removed.
    fn remove_event(&mut self, id: &str) -> bool;
}

/// Week view over a scheduler.
pub struct StoreCalendar<'a> {
    scheduler: &'a mut Scheduler,
    date: NaiveDate,
}

impl<'a> StoreCalendar<'a> {
    pub fn new(scheduler: &'a mut Scheduler, date: NaiveDate) -> Self {
        StoreCalendar { scheduler, date }
    }
}

impl CalendarApi for StoreCalendar<'_> {
    fn goto_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    fn current_date(&self) -> NaiveDate {
        self.date
    }

    fn refetch_events(&self) -> Vec<EventRecord> {
        events_in_week(self.scheduler.store(), self.date)
            .into_iter()
            .cloned()
            .collect()
    }

    fn remove_event(&mut self, id: &str) -> bool {
        matches!(self.scheduler.remove(id), Commit::Accepted(_))
    }
}
