//! CMS page endpoints. Pages are addressed by slug.

use axum::extract::{Path, State};
use validator::Validate;

use super::{error, success, ApiResult, JsonBody};
use crate::errors::AppError;
use crate::models::{CmsPage, CmsPageCreateRequest, CmsPageUpdateRequest};
use crate::AppState;

/// GET /api/admin/cms-pages - All pages ordered by slug.
pub async fn list_cms_pages(State(state): State<AppState>) -> ApiResult<Vec<CmsPage>> {
    match state.repo.list_cms_pages().await {
        Ok(pages) => success(pages),
        Err(e) => error(e),
    }
}

/// GET /api/cms-pages/:slug
pub async fn get_cms_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<CmsPage> {
    match state.repo.get_cms_page(&slug).await {
        Ok(Some(page)) => success(page),
        Ok(None) => error(AppError::NotFound(format!("CMS page '{}' not found", slug))),
        Err(e) => error(e),
    }
}

/// POST /api/admin/cms-pages
pub async fn create_cms_page(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CmsPageCreateRequest>,
) -> ApiResult<CmsPage> {
    if let Err(e) = request.validate() {
        return error(e.into());
    }

    match state.repo.create_cms_page(&request).await {
        Ok(page) => success(page),
        Err(e) => error(e),
    }
}

/// PUT /api/admin/cms-pages/:slug
pub async fn update_cms_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    JsonBody(request): JsonBody<CmsPageUpdateRequest>,
) -> ApiResult<CmsPage> {
    if let Err(e) = request.validate() {
        return error(e.into());
    }

    match state.repo.update_cms_page(&slug, &request).await {
        Ok(Some(page)) => success(page),
        Ok(None) => error(AppError::NotFound(format!("CMS page '{}' not found", slug))),
        Err(e) => error(e),
    }
}

/// DELETE /api/admin/cms-pages/:slug
pub async fn delete_cms_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<()> {
    match state.repo.delete_cms_page(&slug).await {
        Ok(true) => success(()),
        Ok(false) => error(AppError::NotFound(format!("CMS page '{}' not found", slug))),
        Err(e) => error(e),
    }
}
