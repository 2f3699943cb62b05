//! Month calendar grid with event markers.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::error::{ParishError, ParishResult};
use crate::occurrence::{Schedule, has_any_event_on};

/// Six Sunday-first weeks, enough to hold any month.
pub const GRID_CELLS: usize = 42;

/// One day in the month grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for the leading/trailing days of neighbouring months
    pub in_month: bool,
    pub has_events: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<DayCell>,
}

impl MonthView {
    /// Build the grid for `year`-`month`, marking days that have events.
    ///
    /// `today` is passed in by the caller; nothing here reads the clock.
    pub fn build<E: Schedule>(
        year: i32,
        month: u32,
        events: &[E],
        today: NaiveDate,
    ) -> ParishResult<Self> {
        let out_of_range = || ParishError::InvalidMonth { year, month };

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
        let lead = u64::from(first.weekday().num_days_from_sunday());
        // Months at the edges of chrono's range can't be padded out to a full grid
        let grid_start = first.checked_sub_days(Days::new(lead)).ok_or_else(out_of_range)?;

        let cells = (0..GRID_CELLS as u64)
            .map(|offset| {
                let date = grid_start
                    .checked_add_days(Days::new(offset))
                    .ok_or_else(out_of_range)?;
                Ok(DayCell {
                    date,
                    in_month: date.month() == month,
                    has_events: has_any_event_on(events, date),
                    is_today: date == today,
                })
            })
            .collect::<ParishResult<Vec<_>>>()?;

        Ok(MonthView { year, month, cells })
    }

    /// Cells split into rows of seven, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    /// Days of this month that have at least one event.
    pub fn marked_days(&self) -> Vec<NaiveDate> {
        self.cells
            .iter()
            .filter(|c| c.in_month && c.has_events)
            .map(|c| c.date)
            .collect()
    }
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> ParishResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| ParishError::InvalidDate(s.to_string()))
}

/// Parse YYYY-MM into (year, month)
pub fn parse_year_month(s: &str) -> ParishResult<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| ParishError::InvalidDate(s.to_string()))?;
    Ok((date.year(), date.month()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_starts_on_sunday_and_has_42_cells() {
        let view = MonthView::build::<Event>(2024, 6, &[], ymd(2024, 6, 15)).unwrap();

        assert_eq!(view.cells.len(), GRID_CELLS);
        // June 1st 2024 is a Saturday, so the grid starts on May 26th
        assert_eq!(view.cells[0].date, ymd(2024, 5, 26));
        assert!(!view.cells[0].in_month);
        assert_eq!(view.cells[6].date, ymd(2024, 6, 1));
        assert!(view.cells[6].in_month);
        assert_eq!(view.weeks().count(), 6);
    }

    #[test]
    fn marks_weekly_event_days() {
        let start = ymd(2024, 6, 2).and_hms_opt(10, 0, 0).unwrap();
        let events = vec![Event::new("w", "Worship", start).recurring("weekly")];

        let view = MonthView::build(2024, 6, &events, ymd(2024, 6, 15)).unwrap();

        assert_eq!(
            view.marked_days(),
            vec![ymd(2024, 6, 2), ymd(2024, 6, 9), ymd(2024, 6, 16), ymd(2024, 6, 23), ymd(2024, 6, 30)]
        );
    }

    #[test]
    fn flags_today() {
        let view = MonthView::build::<Event>(2024, 6, &[], ymd(2024, 6, 15)).unwrap();
        let today: Vec<_> = view.cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, ymd(2024, 6, 15));
    }

    #[test]
    fn rejects_invalid_month() {
        let err = MonthView::build::<Event>(2024, 13, &[], ymd(2024, 6, 15)).unwrap_err();
        assert!(matches!(err, ParishError::InvalidMonth { year: 2024, month: 13 }));
    }

    #[test]
    fn months_at_the_edge_of_the_calendar_are_rejected() {
        let today = ymd(2024, 6, 15);

        let err = MonthView::build::<Event>(NaiveDate::MIN.year(), 1, &[], today).unwrap_err();
        assert!(matches!(err, ParishError::InvalidMonth { month: 1, .. }));

        let err = MonthView::build::<Event>(NaiveDate::MAX.year(), 12, &[], today).unwrap_err();
        assert!(matches!(err, ParishError::InvalidMonth { month: 12, .. }));
    }

    #[test]
    fn parses_dates() {
        assert_eq!(parse_date("2024-06-02").unwrap(), ymd(2024, 6, 2));
        assert!(parse_date("06/02/2024").is_err());
        assert_eq!(parse_year_month("2024-02").unwrap(), (2024, 2));
        assert!(parse_year_month("2024-13").is_err());
    }
}
