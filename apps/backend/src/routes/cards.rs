//! Card endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use flashcard_core::added_message;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/cards
pub async fn add(
    State(state): State<AppState>,
    Json(request): Json<AddCardRequest>,
) -> Result<Json<AddCardResponse>> {
    let card = state
        .write_store()?
        .add(request.question, request.answer, request.category)
        .clone();

    tracing::info!(card_id = card.id, category = %card.category, "Added card");

    Ok(Json(AddCardResponse {
        message: added_message(&card.category),
        card,
    }))
}

/// GET /api/cards?category=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CardListQuery>,
) -> Result<Json<CardListResponse>> {
    let cards = state.read_store()?.filtered(&query.category);
    Ok(Json(CardListResponse {
        total: cards.len(),
        cards,
    }))
}

/// GET /api/cards/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Flashcard>> {
    state
        .read_store()?
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Card {}", id)))
}

/// GET /api/categories
pub async fn categories() -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        categories: Category::KNOWN.to_vec(),
    })
}
