//! CMS-managed content pages addressed by slug.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CmsPage {
    pub slug: String,
    pub title: String,
    pub image_url: String,
    pub markdown: String,
    pub updated_at: String,
}

/// Request body for creating a page. The slug cannot change afterwards.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CmsPageCreateRequest {
    #[validate(custom(function = "crate::validation::slug", message = "Slug must be lowercase letters, digits and dashes"))]
    pub slug: String,
    #[validate(custom(function = "crate::validation::not_blank", message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validation::not_blank", message = "Image URL is required"))]
    pub image_url: String,
    #[serde(default)]
    pub markdown: String,
}

/// Request body for updating a page. Any `slug` in the body is ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CmsPageUpdateRequest {
    #[validate(custom(function = "crate::validation::not_blank", message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validation::not_blank", message = "Image URL is required"))]
    pub image_url: String,
    #[serde(default)]
    pub markdown: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_ignores_slug() {
        let req: CmsPageUpdateRequest = serde_json::from_value(serde_json::json!({
            "slug": "other",
            "title": "CEO message",
            "imageUrl": "/assets/ceo.jpg"
        }))
        .unwrap();
        assert_eq!(req.title, "CEO message");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_bad_slug() {
        let req: CmsPageCreateRequest = serde_json::from_value(serde_json::json!({
            "slug": "Company CEO",
            "title": "x",
            "imageUrl": "/assets/x.jpg"
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_image_url_is_required() {
        let create: CmsPageCreateRequest = serde_json::from_value(serde_json::json!({
            "slug": "company-history",
            "title": "History"
        }))
        .unwrap();
        let errors = create.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("image_url"));

        let update: CmsPageUpdateRequest = serde_json::from_value(serde_json::json!({
            "title": "History",
            "imageUrl": "  "
        }))
        .unwrap();
        assert!(update.validate().is_err());
    }
}
