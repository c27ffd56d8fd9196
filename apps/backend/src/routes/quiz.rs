//! Quiz mode endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/sessions/{id}/quiz/start
pub async fn start(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    request: Option<Json<FilterRequest>>,
) -> Result<Json<QuizView>> {
    let filter = super::review::filter_from(request);
    let store = state.read_store()?;
    let (view, total) = state.sessions.with_session(session_id, |session| {
        let view = session.start_quiz(&store, &filter);
        (view, session.quiz_progress().map_or(0, |p| p.total))
    })?;

    tracing::info!(%session_id, total, category = ?filter, "Started quiz");
    Ok(Json(view))
}

/// POST /api/sessions/{id}/quiz/answer
pub async fn answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<Json<QuizView>> {
    let (view, progress) = state.sessions.with_session(session_id, |session| {
        session
            .submit_answer(&request.answer)
            .map(|view| (view, session.quiz_progress()))
    })??;

    if let Some(progress) = progress.filter(|p| p.finished) {
        tracing::info!(
            %session_id,
            score = progress.score,
            total = progress.total,
            "Quiz finished"
        );
    }
    Ok(Json(view))
}

/// GET /api/sessions/{id}/quiz
pub async fn progress(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<QuizProgress>> {
    state
        .sessions
        .with_session(session_id, |session| session.quiz_progress())?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No quiz for session {}", session_id)))
}
