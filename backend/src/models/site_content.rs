//! Editable site content document: hero copy, catalog, partners and contact
//! details shown across the public pages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    /// Section anchor the call to action scrolls to
    pub cta_target: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationCategory {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub process: String,
    pub recommended_product_category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub manufacturer: String,
    /// Free text: a single value, a range or a list (`"355 / 532 / 1064"`)
    pub wavelength_nm: String,
    pub power_w: f64,
    pub interface: String,
    pub benefit: String,
    pub datasheet_url: String,
    pub cad_url: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PartnerCategory {
    Laser,
    Measurement,
    Optics,
    Vision,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartnerBrand {
    pub id: String,
    pub name: String,
    pub category: PartnerCategory,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolutionArea {
    pub id: String,
    pub title: String,
    pub overview: String,
    pub capabilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuickLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteContact {
    pub headquarter: String,
    pub rd_center: String,
    pub tel: String,
    pub fax: String,
    pub email: String,
    pub website: String,
}

/// The whole document; stored and replaced as one JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub hero_slides: Vec<HeroSlide>,
    pub applications: Vec<ApplicationCategory>,
    pub products: Vec<Product>,
    pub partners: Vec<PartnerBrand>,
    pub solutions: Vec<SolutionArea>,
    pub quick_links: Vec<QuickLink>,
    pub process_steps: Vec<String>,
    pub ceo_message: String,
    pub vision_items: Vec<String>,
    pub contact: SiteContact,
}
