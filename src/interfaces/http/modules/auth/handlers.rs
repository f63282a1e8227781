//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use super::dto::{LoginRequest, LoginResponse};
use crate::application::AuthService;
use crate::interfaces::http::common::{domain_error_response, ApiError, ApiResponse, ValidatedJson};

/// Auth state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub auth_service: Arc<AuthService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials"),
        (status = 422, description = "Malformed credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let result = state
        .auth_service
        .login(&request.email, &request.password)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(LoginResponse {
        token: result.token,
        token_type: result.token_type,
        expires_in: result.expires_in,
        person: result.person.into(),
    })))
}
