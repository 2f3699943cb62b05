//! Day parsing for command arguments.

use anyhow::Result;
use chrono::{Days, NaiveDate, NaiveTime};
use parish_core::month::parse_date;

const ABBREVIATIONS: [(&str, &str); 22] = [
    ("sun", "sunday"),
    ("mon", "monday"),
    ("tue", "tuesday"),
    ("tues", "tuesday"),
    ("wed", "wednesday"),
    ("thu", "thursday"),
    ("thur", "thursday"),
    ("thurs", "thursday"),
    ("fri", "friday"),
    ("sat", "saturday"),
    ("jan", "january"),
    ("feb", "february"),
    ("mar", "march"),
    ("apr", "april"),
    ("jun", "june"),
    ("jul", "july"),
    ("aug", "august"),
    ("sep", "september"),
    ("sept", "september"),
    ("oct", "october"),
    ("nov", "november"),
    ("dec", "december"),
];

/// Parse a day given as YYYY-MM-DD or in natural language ("next sunday").
///
/// Relative phrases are resolved against `today`, never the system clock.
pub fn parse_day(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    if let Ok(date) = parse_date(input) {
        return Ok(date);
    }

    let expanded = expand_abbreviations(input);
    let shifted = match expanded.as_str() {
        "today" => Some(today),
        "tomorrow" => today.checked_add_days(Days::new(1)),
        "yesterday" => today.checked_sub_days(Days::new(1)),
        _ => None,
    };
    if let Some(date) = shifted {
        return Ok(date);
    }

    let dt = fuzzydate::parse_relative_to(&expanded, today.and_time(NaiveTime::MIN))
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    Ok(dt.date())
}

/// fuzzydate only knows full day and month names.
fn expand_abbreviations(input: &str) -> String {
    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            ABBREVIATIONS
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map_or(word, |(_, full)| *full)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `date` lies before `today`.
pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_dates_parse_directly() {
        assert_eq!(
            parse_day("2024-12-24", NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 24).unwrap()
        );
    }

    #[test]
    fn expands_day_and_month_abbreviations() {
        assert_eq!(expand_abbreviations("next Sun"), "next sunday");
        assert_eq!(expand_abbreviations("dec 24"), "december 24");
        assert_eq!(expand_abbreviations("thurs"), "thursday");
    }

    #[test]
    fn leaves_other_words_alone() {
        assert_eq!(expand_abbreviations("tomorrow"), "tomorrow");
        assert_eq!(expand_abbreviations("  march   3 "), "march 3");
    }

    #[test]
    fn gibberish_is_an_error() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        assert!(parse_day("banana", today).is_err());
    }

    #[test]
    fn relative_days_follow_the_given_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();

        assert_eq!(parse_day("today", today).unwrap(), today);
        assert_eq!(parse_day("Tomorrow", today).unwrap(), NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(parse_day("yesterday", today).unwrap(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn past_is_strictly_before_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        assert!(is_past(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), today));
        assert!(!is_past(today, today));
    }
}
