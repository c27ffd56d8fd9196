//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

// Re-export shared types from flashcard-core
pub use flashcard_core::types::{
    Category, CategoryFilter, Flashcard, FlipView, QuizProgress, QuizView, ReviewView,
};
pub use flashcard_core::Theme;

// === Cards ===

#[derive(Debug, Deserialize)]
pub struct AddCardRequest {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct AddCardResponse {
    pub message: String,
    pub card: Flashcard,
}

#[derive(Debug, Default, Deserialize)]
pub struct CardListQuery {
    #[serde(default)]
    pub category: CategoryFilter,
}

#[derive(Debug, Serialize)]
pub struct CardListResponse {
    pub cards: Vec<Flashcard>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
}

// === Sessions ===

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    /// Fixed seed for reproducible shuffles.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Initial shuffle flag; falls back to the server default.
    #[serde(default)]
    pub shuffle: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub shuffle: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct DeleteSessionResponse {
    pub deleted: bool,
}

#[derive(Debug, Serialize)]
pub struct ShuffleResponse {
    pub shuffle: bool,
    pub label: String,
}

// === Review ===

/// Category filter body. A missing or `null` category selects all cards.
#[derive(Debug, Default, Deserialize)]
pub struct FilterRequest {
    #[serde(default, deserialize_with = "nullable_filter")]
    pub category: CategoryFilter,
}

#[derive(Debug, Deserialize)]
pub struct MarkRequest {
    pub correct: bool,
    #[serde(default, deserialize_with = "nullable_filter")]
    pub category: CategoryFilter,
}

fn nullable_filter<'de, D>(deserializer: D) -> Result<CategoryFilter, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(CategoryFilter::from)
}

// === Quiz ===

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
}

// === Theme ===

#[derive(Debug, Deserialize)]
pub struct ToggleThemeRequest {
    #[serde(default)]
    pub current: String,
}

#[derive(Debug, Serialize)]
pub struct ToggleThemeResponse {
    pub theme: Theme,
}
