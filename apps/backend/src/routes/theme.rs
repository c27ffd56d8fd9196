//! Theme endpoint

use axum::Json;
use flashcard_core::toggle_theme;

use crate::models::*;

/// POST /api/theme/toggle
pub async fn toggle(Json(request): Json<ToggleThemeRequest>) -> Json<ToggleThemeResponse> {
    Json(ToggleThemeResponse {
        theme: toggle_theme(&request.current),
    })
}
