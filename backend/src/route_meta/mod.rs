//! Route metadata resolution.
//!
//! Picks the page title, favicon and share image for a request path by
//! longest-prefix match over the configured route list.

use crate::defaults::default_route_meta;
use crate::models::RouteMetaSetting;

/// Strip a single trailing slash, keeping the root path intact.
pub fn normalize_path(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// True when `route` covers `path`: equal, or `path` is below it.
fn route_matches(route: &str, path: &str) -> bool {
    if route == "/" {
        return true;
    }
    path == route
        || path
            .strip_prefix(route)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Resolve metadata for `path`.
///
/// Longer routes win; among routes of equal length the one listed first
/// wins. When nothing matches (no catch-all configured) the built-in root
/// entry is returned.
pub fn resolve_route_meta(path: &str, candidates: &[RouteMetaSetting]) -> RouteMetaSetting {
    let path = normalize_path(path);

    let mut ranked: Vec<&RouteMetaSetting> = candidates.iter().collect();
    // sort_by_key is stable, so list order breaks ties
    ranked.sort_by_key(|meta| std::cmp::Reverse(normalize_path(&meta.route).len()));

    ranked
        .into_iter()
        .find(|meta| route_matches(normalize_path(&meta.route), path))
        .cloned()
        .unwrap_or_else(fallback_meta)
}

fn fallback_meta() -> RouteMetaSetting {
    let mut defaults = default_route_meta();
    // default_route_meta() always starts with the "/" entry
    defaults.swap_remove(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(route: &str, title: &str) -> RouteMetaSetting {
        RouteMetaSetting {
            route: route.to_string(),
            title: title.to_string(),
            favicon_url: "/favicon.ico".to_string(),
            og_image_url: "/og.png".to_string(),
            sub_banner_image_url: None,
        }
    }

    fn routes() -> Vec<RouteMetaSetting> {
        vec![
            meta("/", "root"),
            meta("/company", "company"),
            meta("/product", "product"),
            meta("/product/laser", "laser"),
        ]
    }

    #[test]
    fn test_longest_prefix_wins() {
        let routes = routes();
        assert_eq!(resolve_route_meta("/company/introduce", &routes).title, "company");
        assert_eq!(resolve_route_meta("/product/laser/fiber", &routes).title, "laser");
        assert_eq!(resolve_route_meta("/product/optics", &routes).title, "product");
    }

    #[test]
    fn test_prefix_needs_segment_boundary() {
        let routes = routes();
        assert_eq!(resolve_route_meta("/companyx", &routes).title, "root");
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let routes = routes();
        assert_eq!(resolve_route_meta("/company/", &routes).title, "company");
        assert_eq!(resolve_route_meta("/", &routes).title, "root");

        let slashed = vec![meta("/", "root"), meta("/notice/", "notice")];
        assert_eq!(resolve_route_meta("/notice/12", &slashed).title, "notice");
    }

    #[test]
    fn test_duplicate_routes_prefer_first_listed() {
        let routes = vec![meta("/", "root"), meta("/company", "first"), meta("/company", "second")];
        assert_eq!(resolve_route_meta("/company", &routes).title, "first");
    }

    #[test]
    fn test_falls_back_to_builtin_root() {
        let routes = vec![meta("/company", "company")];
        let resolved = resolve_route_meta("/partner", &routes);
        assert_eq!(resolved, default_route_meta()[0]);
        assert_eq!(resolved.route, "/");

        assert_eq!(resolve_route_meta("/anything", &[]).route, "/");
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/a/"), "/a");
        assert_eq!(normalize_path("/a"), "/a");
    }
}
