//! Session lifecycle endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use flashcard_core::Session;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// POST /api/sessions
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>> {
    let shuffle = request.shuffle.unwrap_or(state.config.shuffle_default);
    let session = match request.seed {
        Some(seed) => Session::with_seed(seed),
        None => Session::new(),
    }
    .shuffled(shuffle);

    let session_id = state.sessions.insert(session)?;
    tracing::info!(%session_id, shuffle, active = state.sessions.len()?, "Created session");

    Ok(Json(CreateSessionResponse {
        session_id,
        shuffle,
        created_at: Utc::now(),
    }))
}

/// DELETE /api/sessions/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<DeleteSessionResponse>> {
    let deleted = state.sessions.remove(session_id)?;
    if deleted {
        tracing::info!(%session_id, active = state.sessions.len()?, "Removed session");
    }
    Ok(Json(DeleteSessionResponse { deleted }))
}

/// POST /api/sessions/{id}/shuffle
pub async fn toggle_shuffle(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ShuffleResponse>> {
    let (shuffle, label) = state.sessions.with_session(session_id, |session| {
        let label = session.toggle_shuffle();
        (session.shuffle_enabled(), label)
    })?;

    tracing::debug!(%session_id, shuffle, "Toggled shuffle");
    Ok(Json(ShuffleResponse { shuffle, label }))
}
