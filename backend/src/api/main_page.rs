//! Main page endpoints.

use axum::extract::{Path, State};
use serde::Deserialize;
use validator::Validate;

use super::{error, success, ApiResult, JsonBody};
use crate::errors::AppError;
use crate::models::{MainPageContent, RemoveOutcome, DEFAULT_CARD_LINK};
use crate::validation::{ensure_valid, validate_main_page};
use crate::AppState;

/// Body for appending a slide to the carousel.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AppendSlideRequest {
    #[validate(custom(function = "crate::validation::not_blank", message = "Image URL is required"))]
    pub image_url: String,
}

/// Body for appending an application card.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AppendCardRequest {
    #[validate(custom(function = "crate::validation::not_blank", message = "Label is required"))]
    pub label: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub link_url: Option<String>,
}

/// GET /api/main-page and /api/admin/main-page - The whole document.
pub async fn get_main_page(State(state): State<AppState>) -> ApiResult<MainPageContent> {
    match state.repo.get_main_page_content().await {
        Ok(content) => success(content),
        Err(e) => error(e),
    }
}

/// PUT /api/admin/main-page - Replace the whole document atomically.
pub async fn save_main_page(
    State(state): State<AppState>,
    JsonBody(content): JsonBody<MainPageContent>,
) -> ApiResult<MainPageContent> {
    let content = content.normalized();
    if let Err(e) = ensure_valid(validate_main_page(&content)) {
        return error(e);
    }

    match state.repo.save_main_page_content(content).await {
        Ok(saved) => success(saved),
        Err(e) => error(e),
    }
}

/// POST /api/admin/main-page/slides - Append a slide at the end.
pub async fn append_slide(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AppendSlideRequest>,
) -> ApiResult<MainPageContent> {
    if let Err(e) = request.validate() {
        return error(e.into());
    }

    let mut content = match state.repo.get_main_page_content().await {
        Ok(content) => content,
        Err(e) => return error(e),
    };
    let index = content.slides.len();
    content.add_slide();
    content.slides[index].image_url = request.image_url.trim().to_string();

    persist(&state, content).await
}

/// POST /api/admin/main-page/cards - Append an application card at the end.
pub async fn append_card(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AppendCardRequest>,
) -> ApiResult<MainPageContent> {
    if let Err(e) = request.validate() {
        return error(e.into());
    }

    let mut content = match state.repo.get_main_page_content().await {
        Ok(content) => content,
        Err(e) => return error(e),
    };
    let index = content.application_cards.len();
    content.add_card();
    let card = &mut content.application_cards[index];
    card.label = request.label.trim().to_string();
    card.image_url = request.image_url;
    card.link_url = request
        .link_url
        .filter(|link| !link.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_CARD_LINK.to_string());

    persist(&state, content).await
}

/// DELETE /api/admin/main-page/slides/:id - Remove one slide.
pub async fn remove_slide(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MainPageContent> {
    let mut content = match state.repo.get_main_page_content().await {
        Ok(content) => content,
        Err(e) => return error(e),
    };

    match content.remove_slide(&id) {
        RemoveOutcome::Removed => persist(&state, content).await,
        RemoveOutcome::NotFound => error(AppError::NotFound(format!("Slide {} not found", id))),
        RemoveOutcome::LastRemaining => error(AppError::validation(
            "The main page needs at least one slide",
        )),
    }
}

/// DELETE /api/admin/main-page/cards/:id - Remove one application card.
pub async fn remove_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MainPageContent> {
    let mut content = match state.repo.get_main_page_content().await {
        Ok(content) => content,
        Err(e) => return error(e),
    };

    match content.remove_card(&id) {
        RemoveOutcome::Removed => persist(&state, content).await,
        RemoveOutcome::NotFound => error(AppError::NotFound(format!("Card {} not found", id))),
        RemoveOutcome::LastRemaining => error(AppError::validation(
            "The main page needs at least one application card",
        )),
    }
}

async fn persist(state: &AppState, content: MainPageContent) -> ApiResult<MainPageContent> {
    let content = content.normalized();
    if let Err(e) = ensure_valid(validate_main_page(&content)) {
        return error(e);
    }
    match state.repo.save_main_page_content(content).await {
        Ok(saved) => success(saved),
        Err(e) => error(e),
    }
}
