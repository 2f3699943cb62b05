//! Month grid for the calendar widget

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::Local;
use parish_core::month::{MonthView, parse_date};
use serde::Deserialize;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/calendar/{year}/{month}", get(month_view))
}

#[derive(Deserialize)]
pub struct MonthQuery {
    /// Reference day for the `isToday` flag, defaults to the server's today
    pub today: Option<String>,
}

/// GET /calendar/:year/:month - 42-cell grid with event markers
async fn month_view(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthView>, AppError> {
    let today = match query.today.as_deref() {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let events = state.store.published_events()?;
    let view = MonthView::build(year, month, &events, today)?;

    Ok(Json(view))
}
