//! File upload endpoints. The request body is the raw file; its name and
//! type travel in the `x-file-name` and `x-file-type` headers.

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
};

use super::{error, success, ApiResult};
use crate::uploads::{decode_header_file_name, StoredFile, UploadKind};
use crate::AppState;

pub const FILE_NAME_HEADER: &str = "x-file-name";
pub const FILE_TYPE_HEADER: &str = "x-file-type";

/// POST /api/uploads/inquiry - Public inquiry attachment.
pub async fn upload_inquiry_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<StoredFile> {
    store(&state, UploadKind::Inquiry, &headers, &body).await
}

/// POST /api/admin/uploads/resource - Resource library file.
pub async fn upload_resource_file(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<StoredFile> {
    store(&state, UploadKind::Resource, &headers, &body).await
}

async fn store(
    state: &AppState,
    kind: UploadKind,
    headers: &HeaderMap,
    body: &[u8],
) -> ApiResult<StoredFile> {
    let file_name = headers
        .get(FILE_NAME_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(decode_header_file_name)
        .unwrap_or_else(|| kind.fallback_file_name().to_string());
    let mime_type = headers
        .get(FILE_TYPE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    match state.blobs.store(kind, body, &file_name, mime_type).await {
        Ok(stored) => success(stored),
        Err(e) => error(e),
    }
}
