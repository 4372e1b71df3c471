//! Auth handlers — register, login, logout, me, and the declared-but-unbuilt
//! refresh / verify-email / password-reset flows.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use hobbylink_core::error::AppError;
use hobbylink_service::session::RegisterRequest as ServiceRegisterRequest;

use crate::dto::request::{
    ForgotPasswordRequest, LoginRequest, RefreshRequest, RegisterRequest, ResetPasswordRequest,
    VerifyEmailRequest,
};
use crate::dto::response::{ApiResponse, AuthResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let session = state
        .session_service
        .register(ServiceRegisterRequest {
            username: req.username,
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            phone_number: req.phone_number,
            date_of_birth: req.date_of_birth,
            profile_image_url: req.profile_image_url,
            hobby_ids: req.hobby_ids,
        })
        .await?;

    Ok(Json(ApiResponse::ok(AuthResponse::from(session))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let session = state
        .session_service
        .login(&req.email_or_username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(AuthResponse::from(session))))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.session_service.logout(auth.user_id()).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out successfully".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let (user, hobbies) = state.user_service.get_profile(auth.user_id()).await?;

    Ok(Json(ApiResponse::ok(UserResponse::from_parts(
        user, hobbies,
    ))))
}

/// POST /api/auth/refresh — declared, unbuilt.
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    let session = state.session_service.refresh_token(&req.refresh_token).await?;
    Ok(Json(ApiResponse::ok(AuthResponse::from(session))))
}

/// POST /api/auth/verify-email — declared, unbuilt.
pub async fn verify_email(
    State(state): State<AppState>,
    Json(req): Json<VerifyEmailRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.session_service.verify_email(&req.token).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Email verified".to_string(),
    })))
}

/// POST /api/auth/forgot-password — declared, unbuilt.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.session_service.forgot_password(&req.email).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password reset initiated".to_string(),
    })))
}

/// POST /api/auth/reset-password — declared, unbuilt.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .session_service
        .reset_password(&req.token, &req.new_password)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password reset".to_string(),
    })))
}
