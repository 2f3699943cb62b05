//! Access to the events table.
//!
//! The hosted database is reached through `EventStore`; `JsonFileStore`
//! reads a JSON export of the table, which is what the CLI and server use.

use std::path::{Path, PathBuf};

use crate::error::{ParishError, ParishResult};
use crate::event::Event;

pub trait EventStore: Send + Sync {
    /// Every event, drafts included.
    fn all_events(&self) -> ParishResult<Vec<Event>>;

    /// Only events visitors may see.
    fn published_events(&self) -> ParishResult<Vec<Event>> {
        let mut events = self.all_events()?;
        events.retain(Event::is_published);
        Ok(events)
    }
}

/// Events stored as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventStore for JsonFileStore {
    fn all_events(&self) -> ParishResult<Vec<Event>> {
        if !self.path.exists() {
            tracing::warn!(path = %self.path.display(), "events file not found, treating as empty");
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let events: Vec<Event> = serde_json::from_str(&content).map_err(|e| {
            ParishError::Serialization(format!(
                "Failed to parse events from {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(count = events.len(), "loaded events");
        Ok(events)
    }
}

/// In-memory store, handy for tests and previews.
impl EventStore for Vec<Event> {
    fn all_events(&self) -> ParishResult<Vec<Event>> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventStatus;

    const EVENTS_JSON: &str = r#"[
        {"id": "1", "title": "Sunday Worship", "startDateTime": "2024-06-02T10:00:00",
         "isRecurring": true, "recurrencePattern": "weekly"},
        {"id": "2", "title": "Draft Retreat", "startDateTime": "2024-07-12T09:00:00",
         "status": "draft"}
    ]"#;

    #[test]
    fn reads_json_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, EVENTS_JSON).unwrap();

        let store = JsonFileStore::new(&path);
        let all = store.all_events().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].status, EventStatus::Draft);

        let published = store.published_events().unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].title, "Sunday Worship");
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nope.json"));
        assert!(store.all_events().unwrap().is_empty());
    }

    #[test]
    fn malformed_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(&path).all_events().unwrap_err();
        assert!(matches!(err, ParishError::Serialization(_)));
    }
}
