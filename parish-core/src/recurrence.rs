//! Classification of free-text recurrence patterns.
//!
//! The store keeps the pattern as untyped text ("Weekly", "Every other
//! Sunday (bi-weekly)", "Monthly potluck", ...). Classification is a
//! case-insensitive substring match, first match wins:
//!
//! 1. `daily`
//! 2. `bi-weekly` / `biweekly`
//! 3. `weekly`
//! 4. `monthly`
//!
//! Anything else is kept as `Custom` and never matches a date.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recurrence {
    Daily,
    Weekly,
    /// Every other week, anchored on the start date's week
    Biweekly,
    Monthly,
    Custom(String),
}

impl Recurrence {
    pub fn classify(pattern: &str) -> Self {
        let lower = pattern.to_lowercase();

        // "bi-weekly" and "biweekly" both contain "weekly", so they go first.
        if lower.contains("daily") {
            Recurrence::Daily
        } else if lower.contains("bi-weekly") || lower.contains("biweekly") {
            Recurrence::Biweekly
        } else if lower.contains("weekly") {
            Recurrence::Weekly
        } else if lower.contains("monthly") {
            Recurrence::Monthly
        } else {
            Recurrence::Custom(pattern.to_string())
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recurrence::Daily => write!(f, "daily"),
            Recurrence::Weekly => write!(f, "weekly"),
            Recurrence::Biweekly => write!(f, "bi-weekly"),
            Recurrence::Monthly => write!(f, "monthly"),
            Recurrence::Custom(text) => write!(f, "{}", text),
        }
    }
}
