//! Public event listing for a single day

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::Local;
use parish_core::location::format_location;
use parish_core::month::parse_date;
use parish_core::{Event, events_on};
use serde::{Deserialize, Serialize};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/events", get(list_events_on_day))
}

#[derive(Deserialize)]
pub struct DayQuery {
    /// YYYY-MM-DD, defaults to today
    pub date: Option<String>,
}

/// Event plus the location text the page shows
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,
    pub display_location: String,
}

impl From<&Event> for EventView {
    fn from(event: &Event) -> Self {
        EventView {
            display_location: format_location(event.location.as_deref()),
            event: event.clone(),
        }
    }
}

/// GET /events?date=YYYY-MM-DD - Published events happening that day
async fn list_events_on_day(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Vec<EventView>>, AppError> {
    let date = match query.date.as_deref() {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let events = state.store.published_events()?;
    let views: Vec<EventView> = events_on(&events, date)
        .into_iter()
        .map(EventView::from)
        .collect();

    tracing::debug!(%date, count = views.len(), "events on day");
    Ok(Json(views))
}
