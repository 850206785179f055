//! Public site settings: per-route metadata and the header menus.

use serde::{Deserialize, Serialize};

/// Page metadata applied to every path under `route`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteMetaSetting {
    pub route: String,
    pub title: String,
    pub favicon_url: String,
    pub og_image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_banner_image_url: Option<String>,
}

/// Link target of a menu entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MenuTarget {
    #[serde(rename = "_self")]
    SameWindow,
    #[serde(rename = "_blank")]
    NewWindow,
}

/// A node of the header navigation tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeaderMenuItem {
    pub id: String,
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<MenuTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<HeaderMenuItem>>,
}

impl HeaderMenuItem {
    /// Child nodes, treating an absent list as empty.
    pub fn children(&self) -> &[HeaderMenuItem] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// Singleton settings document, stored as one JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicSiteSettings {
    pub route_meta: Vec<RouteMetaSetting>,
    pub header_top_menu: Vec<HeaderMenuItem>,
    pub header_product_mega: Vec<HeaderMenuItem>,
}

/// Query string for route metadata lookups.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteMetaQuery {
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    "/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_wire_format() {
        let json = serde_json::json!({
            "id": "x",
            "label": "Partner",
            "href": "https://example.com",
            "target": "_blank"
        });
        let item: HeaderMenuItem = serde_json::from_value(json).unwrap();
        assert_eq!(item.target, Some(MenuTarget::NewWindow));
        assert!(item.children().is_empty());

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["target"], "_blank");
        assert!(back.get("children").is_none());
    }

    #[test]
    fn test_unknown_target_is_rejected() {
        let json = serde_json::json!({
            "id": "x",
            "label": "x",
            "href": "/x",
            "target": "_parent"
        });
        assert!(serde_json::from_value::<HeaderMenuItem>(json).is_err());
    }
}
