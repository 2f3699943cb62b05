use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use parish_core::{Event, upcoming};

use crate::render::{Render, render_day_heading};

pub fn run(events: &[Event], today: NaiveDate, days: u32) -> Result<()> {
    let schedule = upcoming(events, today, days);

    if schedule.is_empty() {
        println!("{}", format!("No events in the next {} days", days).dimmed());
        return Ok(());
    }

    for (i, (date, day_events)) in schedule.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", render_day_heading(*date, today));
        for event in day_events {
            println!("{}", event.render());
        }
    }

    Ok(())
}
