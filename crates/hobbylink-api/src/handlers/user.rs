//! User search handlers.

use axum::Json;
use axum::extract::{Query, State};

use hobbylink_core::types::Coordinate;

use crate::dto::request::NearbyQuery;
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users/nearby
pub async fn nearby(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    let center = Coordinate::new(query.latitude, query.longitude);
    let users = state.user_service.nearby(center, query.radius_km).await?;

    Ok(Json(ApiResponse::ok(
        users
            .into_iter()
            .map(|u| UserResponse::from_parts(u, Vec::new()))
            .collect(),
    )))
}
