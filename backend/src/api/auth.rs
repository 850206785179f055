//! Admin login endpoint.

use axum::extract::State;
use serde::Deserialize;
use validator::Validate;

use super::{error, success, ApiResult, JsonBody};
use crate::auth::IssuedToken;
use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// POST /api/auth/login - Exchange admin credentials for a token.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<IssuedToken> {
    if let Err(e) = request.validate() {
        return error(e.into());
    }

    if !state
        .tokens
        .check_credentials(&request.username, &request.password)
    {
        return error(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    match state.tokens.issue(&request.username) {
        Ok(issued) => {
            tracing::info!(user = %request.username, "Admin logged in");
            success(issued)
        }
        Err(e) => error(e),
    }
}
