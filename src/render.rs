//! Terminal rendering for parish types.

use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;
use parish_core::location::format_location;
use parish_core::month::{DayCell, MonthView};
use parish_core::Event;

use crate::dates::is_past;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = self.start_date_time.format("%H:%M").to_string();
        let mut line = format!("  {:>5}  {}", time, self.title.bold());

        if let Some(recurrence) = self.recurrence() {
            line.push_str(&format!(" {}", format!("({})", recurrence).dimmed()));
        }
        if self.registration_required {
            line.push_str(&format!(" {}", "registration required".yellow()));
        }

        let location = format_location(self.location.as_deref());
        line.push_str(&format!("\n         {}", location.dimmed()));
        line
    }
}

/// Heading for a day, e.g. "Sunday, June 2 2024"
pub fn render_day_heading(date: NaiveDate, today: NaiveDate) -> String {
    let label = match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%A, %B %-d %Y").to_string(),
    };

    if is_past(date, today) {
        label.dimmed().to_string()
    } else {
        label.bold().to_string()
    }
}

/// Month grids need the reference day to dim the past.
pub trait RenderMonth {
    fn render(&self, today: NaiveDate) -> String;
}

impl RenderMonth for MonthView {
    fn render(&self, today: NaiveDate) -> String {
        let mut lines = Vec::new();

        let title = self
            .cells
            .iter()
            .find(|c| c.in_month)
            .map(|c| c.date.format("%B %Y").to_string())
            .unwrap_or_default();
        lines.push(format!("{:^20}", title).bold().to_string());
        lines.push("Su Mo Tu We Th Fr Sa".dimmed().to_string());

        for week in self.weeks() {
            let row: Vec<String> = week.iter().map(|cell| render_cell(cell, today)).collect();
            lines.push(row.join(" "));
        }

        lines.join("\n")
    }
}

fn render_cell(cell: &DayCell, today: NaiveDate) -> String {
    let day = format!("{:>2}", cell.date.day());

    if !cell.in_month {
        return " ".repeat(2);
    }
    if cell.is_today {
        return day.reversed().to_string();
    }
    match (cell.has_events, is_past(cell.date, today)) {
        (true, false) => day.green().bold().to_string(),
        (true, true) => day.green().to_string(),
        (false, true) => day.dimmed().to_string(),
        (false, false) => day,
    }
}
