//! Resource library entries (catalogs, white papers, certificates, case studies).

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Closed set of resource categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResourceType {
    Catalog,
    #[serde(rename = "White Paper")]
    WhitePaper,
    Certificate,
    #[serde(rename = "Case Study")]
    CaseStudy,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Catalog => "Catalog",
            ResourceType::WhitePaper => "White Paper",
            ResourceType::Certificate => "Certificate",
            ResourceType::CaseStudy => "Case Study",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Catalog" => Some(ResourceType::Catalog),
            "White Paper" => Some(ResourceType::WhitePaper),
            "Certificate" => Some(ResourceType::Certificate),
            "Case Study" => Some(ResourceType::CaseStudy),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub file_url: String,
    pub markdown: String,
}

/// Request body for creating or updating a resource.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUpsertRequest {
    #[validate(custom(function = "crate::validation::not_blank", message = "Title is required"))]
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub file_url: String,
    #[serde(default)]
    pub markdown: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_uses_display_names() {
        let item: ResourceUpsertRequest = serde_json::from_value(serde_json::json!({
            "title": "Laser catalog",
            "type": "White Paper"
        }))
        .unwrap();
        assert_eq!(item.resource_type, ResourceType::WhitePaper);
        assert_eq!(item.file_url, "");
        assert_eq!(ResourceType::parse(item.resource_type.as_str()), Some(ResourceType::WhitePaper));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result = serde_json::from_value::<ResourceUpsertRequest>(serde_json::json!({
            "title": "x",
            "type": "Brochure"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_title_fails_validation() {
        let item: ResourceUpsertRequest = serde_json::from_value(serde_json::json!({
            "title": " ",
            "type": "Catalog"
        }))
        .unwrap();
        assert!(item.validate().is_err());
    }
}
