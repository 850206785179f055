//! Inquiry API endpoints.

use axum::extract::{Path, State};

use super::{error, success, ApiResult, JsonBody};
use crate::models::{
    InquiryCreateRequest, InquiryItem, InquiryStatusRequest, MarkReadResult, UnreadCount,
};
use crate::AppState;

/// POST /api/inquiries - Submit a quote or test/demo request.
pub async fn create_inquiry(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<InquiryCreateRequest>,
) -> ApiResult<InquiryItem> {
    if let Err(e) = request.check() {
        return error(e);
    }

    match state.repo.create_inquiry(&request).await {
        Ok(item) => {
            tracing::info!(id = %item.id, kind = item.inquiry_type.as_str(), "Inquiry received");
            success(item)
        }
        Err(e) => error(e),
    }
}

/// GET /api/admin/inquiries - All inquiries, newest first.
pub async fn list_inquiries(State(state): State<AppState>) -> ApiResult<Vec<InquiryItem>> {
    match state.repo.list_inquiries().await {
        Ok(items) => success(items),
        Err(e) => error(e),
    }
}

/// GET /api/admin/inquiries/unread-count
pub async fn unread_inquiry_count(State(state): State<AppState>) -> ApiResult<UnreadCount> {
    match state.repo.count_unread_inquiries().await {
        Ok(unread_count) => success(UnreadCount { unread_count }),
        Err(e) => error(e),
    }
}

/// PUT /api/admin/inquiries/read-all
pub async fn mark_all_inquiries_read(State(state): State<AppState>) -> ApiResult<MarkReadResult> {
    match state.repo.mark_all_inquiries_read().await {
        Ok(updated_count) => success(MarkReadResult { updated_count }),
        Err(e) => error(e),
    }
}

/// PUT /api/admin/inquiries/:id/status
pub async fn update_inquiry_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<InquiryStatusRequest>,
) -> ApiResult<InquiryItem> {
    match state.repo.update_inquiry_status(&id, request.status).await {
        Ok(item) => success(item),
        Err(e) => error(e),
    }
}
