//! Review mode endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/sessions/{id}/review/advance
pub async fn advance(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    request: Option<Json<FilterRequest>>,
) -> Result<Json<ReviewView>> {
    let filter = filter_from(request);
    let store = state.read_store()?;
    let view = state
        .sessions
        .with_session(session_id, |session| session.advance(&store, &filter))?;
    Ok(Json(view))
}

/// POST /api/sessions/{id}/review/flip
pub async fn flip(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    request: Option<Json<FilterRequest>>,
) -> Result<Json<FlipView>> {
    let filter = filter_from(request);
    let store = state.read_store()?;
    let view = state
        .sessions
        .with_session(session_id, |session| session.flip(&store, &filter))?;
    Ok(Json(view))
}

/// POST /api/sessions/{id}/review/mark
pub async fn mark(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<MarkRequest>,
) -> Result<Json<ReviewView>> {
    let store = state.read_store()?;
    let view = state.sessions.with_session(session_id, |session| {
        session.mark(request.correct, &store, &request.category)
    })?;

    tracing::debug!(
        %session_id,
        correct = request.correct,
        streak = view.streak,
        "Marked card"
    );
    Ok(Json(view))
}

/// A request without a body reviews every card.
pub(crate) fn filter_from(request: Option<Json<FilterRequest>>) -> CategoryFilter {
    request
        .map(|Json(request)| request)
        .unwrap_or_default()
        .category
}
