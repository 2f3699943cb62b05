use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;
use parish_core::Event;
use parish_core::month::{MonthView, parse_year_month};

use crate::render::RenderMonth;

pub fn run(events: &[Event], month: Option<&str>, today: NaiveDate) -> Result<()> {
    let (year, month) = match month {
        Some(s) => parse_year_month(s)?,
        None => (today.year(), today.month()),
    };

    let view = MonthView::build(year, month, events, today)?;
    println!("{}", view.render(today));

    let marked = view.marked_days().len();
    let label = match marked {
        1 => "1 day with events".to_string(),
        n => format!("{} days with events", n),
    };
    println!("\n{}", label.dimmed());

    Ok(())
}
