//! Resource library endpoints.

use axum::extract::{Path, State};
use validator::Validate;

use super::{error, success, ApiResult, JsonBody};
use crate::errors::AppError;
use crate::models::{ResourceItem, ResourceUpsertRequest};
use crate::AppState;

/// GET /api/resources
pub async fn list_resources(State(state): State<AppState>) -> ApiResult<Vec<ResourceItem>> {
    match state.repo.list_resources().await {
        Ok(items) => success(items),
        Err(e) => error(e),
    }
}

/// POST /api/admin/resources
pub async fn create_resource(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ResourceUpsertRequest>,
) -> ApiResult<ResourceItem> {
    if let Err(e) = request.validate() {
        return error(e.into());
    }

    match state.repo.create_resource(&request).await {
        Ok(item) => success(item),
        Err(e) => error(e),
    }
}

/// PUT /api/admin/resources/:id
pub async fn update_resource(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<ResourceUpsertRequest>,
) -> ApiResult<ResourceItem> {
    if let Err(e) = request.validate() {
        return error(e.into());
    }

    match state.repo.update_resource(&id, &request).await {
        Ok(Some(item)) => success(item),
        Ok(None) => error(AppError::NotFound(format!("Resource {} not found", id))),
        Err(e) => error(e),
    }
}

/// DELETE /api/admin/resources/:id
pub async fn delete_resource(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    match state.repo.delete_resource(&id).await {
        Ok(true) => success(()),
        Ok(false) => error(AppError::NotFound(format!("Resource {} not found", id))),
        Err(e) => error(e),
    }
}
