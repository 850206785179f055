//! Structural validation for the admin documents.
//!
//! Request structs with flat fields use `validator` derives; the nested
//! documents (main page, public site settings) are walked here so every
//! violation is reported with its full JSON path.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{ValidateEmail, ValidateUrl, ValidationError};

use crate::errors::AppError;
use crate::models::{
    HeaderMenuItem, MainPageContent, PublicSiteSettings, SiteContent, MIN_COLLECTION_LEN,
};

/// Menu destinations that render a form and therefore cannot host sub-pages.
pub const LEAF_ONLY_HREFS: [&str; 2] = ["/inquiry/quote", "/inquiry/test-demo"];

const LEAF_ONLY_MESSAGE: &str = "견적요청 / TEST 및 DEMO 페이지는 하위 페이지를 둘 수 없습니다.";

/// One failed rule, addressed by a dotted JSON path such as
/// `headerTopMenu.3.children.0.children`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// `validator` hook: rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// `validator` hook: the domain of an address must contain an inner dot.
///
/// Runs alongside the `email` rule, which also accepts bare hosts like `x@y`.
/// Values without an `@` are left to that rule.
pub fn dotted_email_domain(value: &str) -> Result<(), ValidationError> {
    let dotted = value
        .rsplit_once('@')
        .map(|(_, domain)| {
            domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        })
        .unwrap_or(true);
    if dotted {
        Ok(())
    } else {
        Err(ValidationError::new("email_domain"))
    }
}

fn is_full_email(value: &str) -> bool {
    value.validate_email() && dotted_email_domain(value).is_ok()
}

/// `validator` hook: lowercase ASCII letters, digits and single dashes.
pub fn slug(value: &str) -> Result<(), ValidationError> {
    let well_formed = !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::new("slug").with_message(Cow::Borrowed("invalid slug")))
    }
}

/// Walk a header menu tree and report every leaf-only node that has children.
///
/// `base_path` is the path of the list itself; item `i` lives at
/// `<base_path>.<i>` and its children at `<base_path>.<i>.children`.
pub fn validate_header_menu(items: &[HeaderMenuItem], base_path: &str) -> Vec<Violation> {
    let mut violations = Vec::new();
    walk_menu(items, base_path, &mut violations);
    violations
}

fn walk_menu(items: &[HeaderMenuItem], base_path: &str, out: &mut Vec<Violation>) {
    for (index, item) in items.iter().enumerate() {
        let current = format!("{}.{}", base_path, index);
        let children = item.children();

        if LEAF_ONLY_HREFS.contains(&item.href.as_str()) && !children.is_empty() {
            out.push(Violation::new(format!("{}.children", current), LEAF_ONLY_MESSAGE));
        }
        if !children.is_empty() {
            walk_menu(children, &format!("{}.children", current), out);
        }
    }
}

/// Required-field check for every node of a menu tree.
fn require_menu_fields(items: &[HeaderMenuItem], base_path: &str, out: &mut Vec<Violation>) {
    for (index, item) in items.iter().enumerate() {
        let current = format!("{}.{}", base_path, index);
        for (field, value) in [("id", &item.id), ("label", &item.label), ("href", &item.href)] {
            require(out, &current, field, value);
        }
        require_menu_fields(item.children(), &format!("{}.children", current), out);
    }
}

fn require(out: &mut Vec<Violation>, base: &str, field: &str, value: &str) {
    if value.trim().is_empty() {
        out.push(Violation::new(format!("{}.{}", base, field), "Required"));
    }
}

fn require_items(out: &mut Vec<Violation>, path: &str, len: usize) {
    if len < MIN_COLLECTION_LEN {
        out.push(Violation::new(path, "At least one entry is required"));
    }
}

/// All rules for a public site settings write.
pub fn validate_public_site_settings(settings: &PublicSiteSettings) -> Vec<Violation> {
    let mut out = Vec::new();

    require_items(&mut out, "routeMeta", settings.route_meta.len());
    require_items(&mut out, "headerTopMenu", settings.header_top_menu.len());
    require_items(&mut out, "headerProductMega", settings.header_product_mega.len());

    for (index, meta) in settings.route_meta.iter().enumerate() {
        let base = format!("routeMeta.{}", index);
        require(&mut out, &base, "route", &meta.route);
        require(&mut out, &base, "title", &meta.title);
        require(&mut out, &base, "faviconUrl", &meta.favicon_url);
        require(&mut out, &base, "ogImageUrl", &meta.og_image_url);
    }

    require_menu_fields(&settings.header_top_menu, "headerTopMenu", &mut out);
    require_menu_fields(&settings.header_product_mega, "headerProductMega", &mut out);
    out.extend(validate_header_menu(&settings.header_top_menu, "headerTopMenu"));

    out
}

/// All rules for a main page write. Runs on the normalized document.
pub fn validate_main_page(content: &MainPageContent) -> Vec<Violation> {
    let mut out = Vec::new();

    for (field, value) in content.settings.fields() {
        require(&mut out, "settings", field, value);
    }

    require_items(&mut out, "slides", content.slides.len());
    for (index, slide) in content.slides.iter().enumerate() {
        require(&mut out, &format!("slides.{}", index), "imageUrl", &slide.image_url);
    }

    require_items(&mut out, "applicationCards", content.application_cards.len());
    for (index, card) in content.application_cards.iter().enumerate() {
        let base = format!("applicationCards.{}", index);
        require(&mut out, &base, "label", &card.label);
        require(&mut out, &base, "linkUrl", &card.link_url);
    }

    out
}

fn require_url(out: &mut Vec<Violation>, base: &str, field: &str, value: &str) {
    if !value.validate_url() {
        out.push(Violation::new(format!("{}.{}", base, field), "Must be an absolute URL"));
    }
}

/// All rules for a site content write.
pub fn validate_site_content(content: &SiteContent) -> Vec<Violation> {
    let mut out = Vec::new();

    require_items(&mut out, "heroSlides", content.hero_slides.len());
    for (index, slide) in content.hero_slides.iter().enumerate() {
        let base = format!("heroSlides.{}", index);
        require(&mut out, &base, "id", &slide.id);
        require(&mut out, &base, "title", &slide.title);
        require(&mut out, &base, "subtitle", &slide.subtitle);
        require(&mut out, &base, "ctaLabel", &slide.cta_label);
        require(&mut out, &base, "ctaTarget", &slide.cta_target);
    }

    require_items(&mut out, "applications", content.applications.len());
    for (index, app) in content.applications.iter().enumerate() {
        let base = format!("applications.{}", index);
        require(&mut out, &base, "id", &app.id);
        require(&mut out, &base, "name", &app.name);
        require(&mut out, &base, "summary", &app.summary);
        require(&mut out, &base, "process", &app.process);
        require(
            &mut out,
            &base,
            "recommendedProductCategory",
            &app.recommended_product_category,
        );
    }

    require_items(&mut out, "products", content.products.len());
    for (index, product) in content.products.iter().enumerate() {
        let base = format!("products.{}", index);
        for (field, value) in [
            ("id", &product.id),
            ("name", &product.name),
            ("category", &product.category),
            ("manufacturer", &product.manufacturer),
            ("wavelengthNm", &product.wavelength_nm),
            ("interface", &product.interface),
            ("benefit", &product.benefit),
            ("datasheetUrl", &product.datasheet_url),
            ("cadUrl", &product.cad_url),
        ] {
            require(&mut out, &base, field, value);
        }
        if !product.power_w.is_finite() || product.power_w < 0.0 {
            out.push(Violation::new(
                format!("{}.powerW", base),
                "Must be a non-negative number",
            ));
        }
    }

    require_items(&mut out, "partners", content.partners.len());
    for (index, partner) in content.partners.iter().enumerate() {
        let base = format!("partners.{}", index);
        require(&mut out, &base, "id", &partner.id);
        require(&mut out, &base, "name", &partner.name);
        require_url(&mut out, &base, "url", &partner.url);
    }

    require_items(&mut out, "solutions", content.solutions.len());
    for (index, solution) in content.solutions.iter().enumerate() {
        let base = format!("solutions.{}", index);
        require(&mut out, &base, "id", &solution.id);
        require(&mut out, &base, "title", &solution.title);
        require(&mut out, &base, "overview", &solution.overview);
        for (i, capability) in solution.capabilities.iter().enumerate() {
            require(&mut out, &format!("{}.capabilities", base), &i.to_string(), capability);
        }
    }

    for (index, link) in content.quick_links.iter().enumerate() {
        let base = format!("quickLinks.{}", index);
        require(&mut out, &base, "label", &link.label);
        require_url(&mut out, &base, "url", &link.url);
    }

    require_items(&mut out, "processSteps", content.process_steps.len());
    for (index, step) in content.process_steps.iter().enumerate() {
        require(&mut out, "processSteps", &index.to_string(), step);
    }

    if content.ceo_message.trim().is_empty() {
        out.push(Violation::new("ceoMessage", "Required"));
    }

    require_items(&mut out, "visionItems", content.vision_items.len());
    for (index, item) in content.vision_items.iter().enumerate() {
        require(&mut out, "visionItems", &index.to_string(), item);
    }

    let contact = &content.contact;
    for (field, value) in [
        ("headquarter", &contact.headquarter),
        ("rdCenter", &contact.rd_center),
        ("tel", &contact.tel),
        ("fax", &contact.fax),
        ("website", &contact.website),
    ] {
        require(&mut out, "contact", field, value);
    }
    if !is_full_email(&contact.email) {
        out.push(Violation::new("contact.email", "A valid email address is required"));
    }

    out
}

/// Turn a violation list into a `Validation` error when it is non-empty.
pub fn ensure_valid(violations: Vec<Violation>) -> Result<(), AppError> {
    if violations.is_empty() {
        return Ok(());
    }
    Err(AppError::Validation {
        message: "Invalid payload".to_string(),
        violations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{
        default_main_page_content, default_public_site_settings, default_site_content,
    };

    fn node(id: &str, href: &str, children: Vec<HeaderMenuItem>) -> HeaderMenuItem {
        HeaderMenuItem {
            id: id.to_string(),
            label: id.to_string(),
            href: href.to_string(),
            target: None,
            children: if children.is_empty() { None } else { Some(children) },
        }
    }

    #[test]
    fn test_reserved_node_with_children_is_rejected() {
        let menu = vec![
            node("a", "/a", vec![]),
            node("b", "/b", vec![]),
            node("c", "/c", vec![]),
            node("quote", "/inquiry/quote", vec![node("x", "/x", vec![])]),
        ];
        let violations = validate_header_menu(&menu, "headerTopMenu");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "headerTopMenu.3.children");
    }

    #[test]
    fn test_reserved_node_is_found_at_any_depth() {
        let menu = vec![node(
            "inquiry",
            "/inquiry",
            vec![
                node("quote", "/inquiry/quote", vec![]),
                node(
                    "demo",
                    "/inquiry/test-demo",
                    vec![node("deep", "/inquiry/test-demo/deep", vec![])],
                ),
            ],
        )];
        let violations = validate_header_menu(&menu, "headerTopMenu");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "headerTopMenu.0.children.1.children");
    }

    #[test]
    fn test_childless_reserved_node_passes() {
        let menu = vec![node("quote", "/inquiry/quote", vec![])];
        assert!(validate_header_menu(&menu, "headerTopMenu").is_empty());

        let mut explicit_empty = node("demo", "/inquiry/test-demo", vec![]);
        explicit_empty.children = Some(Vec::new());
        assert!(validate_header_menu(&[explicit_empty], "headerTopMenu").is_empty());
    }

    #[test]
    fn test_empty_lists_are_rejected() {
        let mut settings = default_public_site_settings();
        settings.route_meta.clear();
        settings.header_product_mega.clear();

        let paths: Vec<String> = validate_public_site_settings(&settings)
            .into_iter()
            .map(|v| v.path)
            .collect();
        assert!(paths.contains(&"routeMeta".to_string()));
        assert!(paths.contains(&"headerProductMega".to_string()));
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_public_site_settings(&default_public_site_settings()).is_empty());
        assert!(validate_main_page(&default_main_page_content()).is_empty());
    }

    #[test]
    fn test_main_page_rules() {
        let mut content = default_main_page_content();
        content.settings.hero_cta_href = "  ".to_string();
        content.slides[0].image_url.clear();
        content.application_cards.clear();

        let paths: Vec<String> = validate_main_page(&content)
            .into_iter()
            .map(|v| v.path)
            .collect();
        assert_eq!(
            paths,
            vec!["settings.heroCtaHref", "slides.0.imageUrl", "applicationCards"]
        );
    }

    #[test]
    fn test_slug_rule() {
        assert!(slug("company-ceo").is_ok());
        assert!(slug("partner-core2").is_ok());
        assert!(slug("Company").is_err());
        assert!(slug("-lead").is_err());
        assert!(slug("a--b").is_err());
        assert!(slug("").is_err());
    }

    #[test]
    fn test_ensure_valid() {
        assert!(ensure_valid(Vec::new()).is_ok());
        let err = ensure_valid(vec![Violation::new("x", "y")]).unwrap_err();
        assert!(matches!(err, AppError::Validation { ref violations, .. } if violations.len() == 1));
    }

    #[test]
    fn test_email_needs_dotted_domain() {
        assert!(dotted_email_domain("buyer@example.com").is_ok());
        assert!(dotted_email_domain("x@y").is_err());
        assert!(dotted_email_domain("x@y.").is_err());
        assert!(dotted_email_domain("x@.y").is_err());
        assert!(dotted_email_domain("no-at-sign").is_ok());
        assert!(!is_full_email("no-at-sign"));
        assert!(!is_full_email("x@y"));
        assert!(is_full_email("sales@shinhotek.com"));
    }

    #[test]
    fn test_default_site_content_is_valid() {
        assert_eq!(validate_site_content(&default_site_content()), vec![]);
    }

    #[test]
    fn test_site_content_violations_carry_paths() {
        let mut content = default_site_content();
        content.hero_slides[1].title = " ".to_string();
        content.products[2].power_w = -1.0;
        content.partners[0].url = "uniotech.kr".to_string();
        content.solutions[0].capabilities.push(String::new());
        content.vision_items.clear();
        content.contact.email = "sales@shinhotek".to_string();

        let paths: Vec<String> = validate_site_content(&content)
            .into_iter()
            .map(|v| v.path)
            .collect();
        assert_eq!(
            paths,
            vec![
                "heroSlides.1.title",
                "products.2.powerW",
                "partners.0.url",
                "solutions.0.capabilities.3",
                "visionItems",
                "contact.email",
            ]
        );
    }
}
