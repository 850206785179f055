//! REST API module.
//!
//! Contains all API routes and handlers. Public handlers are read-only apart
//! from inquiry submission; everything under `/api/admin` is token-guarded.

mod auth;
mod cms_pages;
mod inquiries;
mod main_page;
mod notices;
mod resources;
mod site_content;
mod site_settings;
mod uploads;

pub use auth::*;
pub use cms_pages::*;
pub use inquiries::*;
pub use main_page::*;
pub use notices::*;
pub use resources::*;
pub use site_content::*;
pub use site_settings::*;
pub use uploads::*;

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::AppError;

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Create an error API response.
pub fn error<T: Serialize>(err: AppError) -> ApiResult<T> {
    if err.status_code().is_server_error() {
        tracing::error!("Request failed: {}", err);
    } else {
        tracing::warn!("Request rejected: {}", err);
    }
    Err(err)
}

/// JSON body extractor whose rejections use the error envelope.
///
/// Malformed JSON, unknown enum values and missing required fields all
/// surface as `VALIDATION_ERROR` instead of axum's plain-text rejection.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                Err(AppError::validation(rejection.body_text()))
            }
        }
    }
}
