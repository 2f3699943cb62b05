//! Occurrence evaluation: does an event happen on a given calendar day?
//!
//! Everything here is a pure function of its arguments. Matching is by
//! calendar day; the time of day of the candidate never matters.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

use crate::event::Event;
use crate::recurrence::Recurrence;

const SECONDS_PER_DAY: i64 = 86_400;

/// Anything with an event's scheduling fields.
///
/// Lets consumers run the evaluator over their own row types and carry
/// the rest of their data through untouched.
pub trait Schedule {
    fn start_date_time(&self) -> NaiveDateTime;
    fn end_date_time(&self) -> Option<NaiveDateTime>;
    fn is_recurring(&self) -> bool;
    /// `None` when no pattern text is set.
    fn recurrence(&self) -> Option<Recurrence>;
}

impl Schedule for Event {
    fn start_date_time(&self) -> NaiveDateTime {
        self.start_date_time
    }

    fn end_date_time(&self) -> Option<NaiveDateTime> {
        self.end_date_time
    }

    fn is_recurring(&self) -> bool {
        self.is_recurring
    }

    fn recurrence(&self) -> Option<Recurrence> {
        Event::recurrence(self)
    }
}

impl<T: Schedule + ?Sized> Schedule for &T {
    fn start_date_time(&self) -> NaiveDateTime {
        (**self).start_date_time()
    }

    fn end_date_time(&self) -> Option<NaiveDateTime> {
        (**self).end_date_time()
    }

    fn is_recurring(&self) -> bool {
        (**self).is_recurring()
    }

    fn recurrence(&self) -> Option<Recurrence> {
        (**self).recurrence()
    }
}

/// Whether `event` occurs on `date`.
///
/// A recurring event without a pattern never occurs, not even on its
/// start date.
pub fn occurs_on<E: Schedule + ?Sized>(event: &E, date: NaiveDate) -> bool {
    let start = event.start_date_time();
    let anchor = start.date();

    if !event.is_recurring() {
        return date == anchor;
    }

    let Some(recurrence) = event.recurrence() else {
        return false;
    };

    if date < anchor {
        return false;
    }
    if event.end_date_time().is_some_and(|end| date > end.date()) {
        return false;
    }

    match recurrence {
        Recurrence::Daily => true,
        Recurrence::Biweekly => {
            date.weekday() == anchor.weekday() && weeks_between(start, date) % 2 == 0
        }
        Recurrence::Weekly => date.weekday() == anchor.weekday(),
        Recurrence::Monthly => date.day() == anchor.day(),
        Recurrence::Custom(_) => false,
    }
}

/// Whole weeks from the start timestamp to midnight of `date`.
///
/// The day count is rounded up before dividing by seven, so a start time
/// later in the day still lands on the same week number as a midnight start.
fn weeks_between(start: NaiveDateTime, date: NaiveDate) -> i64 {
    let secs = (date.and_time(chrono::NaiveTime::MIN) - start)
        .num_seconds()
        .abs();
    let days = (secs + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    days / 7
}

/// Events occurring on `date`, in input order.
pub fn events_on<'a, E: Schedule>(events: &'a [E], date: NaiveDate) -> Vec<&'a E> {
    events.iter().filter(|e| occurs_on(*e, date)).collect()
}

/// Whether any event occurs on `date`. Stops at the first match.
pub fn has_any_event_on<E: Schedule>(events: &[E], date: NaiveDate) -> bool {
    events.iter().any(|e| occurs_on(e, date))
}

/// Days in `[from, from + days)` with at least one event, each paired with
/// its events in input order. Stops early at the end of the supported
/// date range.
pub fn upcoming<E: Schedule>(events: &[E], from: NaiveDate, days: u32) -> Vec<(NaiveDate, Vec<&E>)> {
    (0..u64::from(days))
        .map_while(|offset| from.checked_add_days(Days::new(offset)))
        .filter_map(|date| {
            let matching = events_on(events, date);
            (!matching.is_empty()).then_some((date, matching))
        })
        .collect()
}
