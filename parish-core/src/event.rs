//! Event records as they come out of the hosted store.
//!
//! Field names serialize in camelCase so rows from the store's JSON API
//! deserialize without any mapping layer.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::recurrence::Recurrence;

/// A church event (service, class, ministry meeting, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Plain text, or a JSON-encoded address object (see `location::format_location`)
    #[serde(default)]
    pub location: Option<String>,

    /// First occurrence
    pub start_date_time: NaiveDateTime,
    #[serde(default)]
    pub end_date_time: Option<NaiveDateTime>,

    #[serde(default)]
    pub is_recurring: bool,
    /// Free text such as "Weekly on Sundays" or "Bi-weekly"
    #[serde(default)]
    pub recurrence_pattern: Option<String>,

    #[serde(default)]
    pub registration_required: bool,
    #[serde(default)]
    pub status: EventStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    #[default]
    Published,
}

impl Event {
    /// A published, one-time event with no end.
    pub fn new(id: impl Into<String>, title: impl Into<String>, start: NaiveDateTime) -> Self {
        Event {
            id: id.into(),
            title: title.into(),
            description: None,
            location: None,
            start_date_time: start,
            end_date_time: None,
            is_recurring: false,
            recurrence_pattern: None,
            registration_required: false,
            status: EventStatus::Published,
        }
    }

    /// Mark the event as recurring under the given pattern text.
    pub fn recurring(mut self, pattern: impl Into<String>) -> Self {
        self.is_recurring = true;
        self.recurrence_pattern = Some(pattern.into());
        self
    }

    pub fn ending(mut self, end: NaiveDateTime) -> Self {
        self.end_date_time = Some(end);
        self
    }

    pub fn is_published(&self) -> bool {
        self.status == EventStatus::Published
    }

    /// Calendar day of the first occurrence (the anchor date).
    pub fn start_date(&self) -> NaiveDate {
        self.start_date_time.date()
    }

    /// Classified recurrence pattern, `None` when the text is absent or blank.
    pub fn recurrence(&self) -> Option<Recurrence> {
        self.recurrence_pattern
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(Recurrence::classify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_store_row() {
        let json = r#"{
            "id": "evt-1",
            "title": "Sunday Worship",
            "location": "Sanctuary",
            "startDateTime": "2024-06-02T10:30:00",
            "endDateTime": "2024-06-02T12:00:00",
            "isRecurring": true,
            "recurrencePattern": "Weekly",
            "registrationRequired": false,
            "status": "published"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.title, "Sunday Worship");
        assert!(event.is_recurring);
        assert_eq!(event.start_date(), NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        assert_eq!(event.recurrence(), Some(Recurrence::Weekly));
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let json = r#"{"id": "x", "title": "Picnic", "startDateTime": "2024-07-04T12:00:00"}"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert!(!event.is_recurring);
        assert!(event.end_date_time.is_none());
        assert!(event.is_published());
    }

    #[test]
    fn blank_pattern_has_no_recurrence() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let event = Event::new("x", "Prayer", start).recurring("   ");
        assert_eq!(event.recurrence(), None);
    }
}
