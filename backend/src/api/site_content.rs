//! Site content document endpoints.

use axum::extract::State;

use super::{error, success, ApiResult, JsonBody};
use crate::models::SiteContent;
use crate::validation::{ensure_valid, validate_site_content};
use crate::AppState;

/// GET /api/content and /api/admin/content
pub async fn get_site_content(State(state): State<AppState>) -> ApiResult<SiteContent> {
    match state.repo.get_site_content().await {
        Ok(content) => success(content),
        Err(e) => error(e),
    }
}

/// PUT /api/admin/content - Replace the whole document.
pub async fn save_site_content(
    State(state): State<AppState>,
    JsonBody(content): JsonBody<SiteContent>,
) -> ApiResult<SiteContent> {
    if let Err(e) = ensure_valid(validate_site_content(&content)) {
        return error(e);
    }

    match state.repo.save_site_content(&content).await {
        Ok(saved) => {
            tracing::info!(
                products = saved.products.len(),
                partners = saved.partners.len(),
                "Saved site content"
            );
            success(saved)
        }
        Err(e) => error(e),
    }
}
