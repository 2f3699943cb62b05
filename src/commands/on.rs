use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use parish_core::{Event, events_on};

use crate::render::{Render, render_day_heading};

pub fn run(events: &[Event], date: NaiveDate, today: NaiveDate) -> Result<()> {
    println!("{}", render_day_heading(date, today));

    let matching = events_on(events, date);
    if matching.is_empty() {
        println!("  {}", "No events".dimmed());
        return Ok(());
    }

    for event in matching {
        println!("{}", event.render());
    }

    Ok(())
}
