//! Public site settings and route metadata endpoints.

use axum::extract::{Query, State};

use super::{error, success, ApiResult, JsonBody};
use crate::models::{PublicSiteSettings, RouteMetaQuery, RouteMetaSetting};
use crate::route_meta::resolve_route_meta;
use crate::validation::{ensure_valid, validate_public_site_settings};
use crate::AppState;

/// GET /api/settings/public and /api/admin/settings/public
pub async fn get_public_settings(State(state): State<AppState>) -> ApiResult<PublicSiteSettings> {
    match state.repo.get_public_site_settings().await {
        Ok(settings) => success(settings),
        Err(e) => error(e),
    }
}

/// PUT /api/admin/settings/public - Replace the settings document.
pub async fn save_public_settings(
    State(state): State<AppState>,
    JsonBody(settings): JsonBody<PublicSiteSettings>,
) -> ApiResult<PublicSiteSettings> {
    if let Err(e) = ensure_valid(validate_public_site_settings(&settings)) {
        return error(e);
    }

    match state.repo.save_public_site_settings(&settings).await {
        Ok(saved) => {
            tracing::info!(routes = saved.route_meta.len(), "Saved public site settings");
            success(saved)
        }
        Err(e) => error(e),
    }
}

/// GET /api/route-meta?path=/company/ceo - Metadata for one page view.
pub async fn get_route_meta(
    State(state): State<AppState>,
    Query(query): Query<RouteMetaQuery>,
) -> ApiResult<RouteMetaSetting> {
    match state.repo.get_public_site_settings().await {
        Ok(settings) => success(resolve_route_meta(&query.path, &settings.route_meta)),
        Err(e) => error(e),
    }
}
