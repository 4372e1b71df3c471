//! Hobby catalog handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HobbyResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/hobbies
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<HobbyResponse>>>, ApiError> {
    let hobbies = state.hobby_catalog.list().await?;

    Ok(Json(ApiResponse::ok(
        hobbies.into_iter().map(HobbyResponse::from).collect(),
    )))
}
