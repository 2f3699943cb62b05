//! Admin-only endpoints

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::get,
};
use parish_core::Event;

use crate::routes::AppError;
use crate::state::AppState;

/// Set by the auth proxy once the session is verified
pub const USER_ID_HEADER: &str = "x-user-id";

pub fn router() -> Router<AppState> {
    Router::new().route("/admin/events", get(list_all_events))
}

fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::new(StatusCode::UNAUTHORIZED, "Sign in required"))?;

    if !state.admin.is_admin(user_id)? {
        tracing::warn!(user_id, "non-admin tried to open admin view");
        return Err(AppError::new(StatusCode::FORBIDDEN, "Admin access required"));
    }

    Ok(())
}

/// GET /admin/events - Every event, drafts included
async fn list_all_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Event>>, AppError> {
    require_admin(&state, &headers)?;
    Ok(Json(state.store.all_events()?))
}
