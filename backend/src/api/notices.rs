//! Notice board endpoints.

use axum::extract::{Path, State};
use validator::Validate;

use super::{error, success, ApiResult, JsonBody};
use crate::errors::AppError;
use crate::models::{NoticeItem, NoticeUpsertRequest};
use crate::AppState;

/// GET /api/notices
pub async fn list_notices(State(state): State<AppState>) -> ApiResult<Vec<NoticeItem>> {
    match state.repo.list_notices().await {
        Ok(items) => success(items),
        Err(e) => error(e),
    }
}

/// POST /api/admin/notices
pub async fn create_notice(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<NoticeUpsertRequest>,
) -> ApiResult<NoticeItem> {
    if let Err(e) = request.validate() {
        return error(e.into());
    }

    match state.repo.create_notice(&request).await {
        Ok(item) => success(item),
        Err(e) => error(e),
    }
}

/// PUT /api/admin/notices/:id
pub async fn update_notice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<NoticeUpsertRequest>,
) -> ApiResult<NoticeItem> {
    if let Err(e) = request.validate() {
        return error(e.into());
    }

    match state.repo.update_notice(&id, &request).await {
        Ok(Some(item)) => success(item),
        Ok(None) => error(AppError::NotFound(format!("Notice {} not found", id))),
        Err(e) => error(e),
    }
}

/// DELETE /api/admin/notices/:id
pub async fn delete_notice(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    match state.repo.delete_notice(&id).await {
        Ok(true) => success(()),
        Ok(false) => error(AppError::NotFound(format!("Notice {} not found", id))),
        Err(e) => error(e),
    }
}
