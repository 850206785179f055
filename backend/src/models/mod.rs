//! Data models for the site backend.
//!
//! These models match the frontend TypeScript interfaces exactly (camelCase on the wire).

mod cms_page;
mod inquiry;
mod main_page;
mod notice;
mod resource;
mod site_content;
mod site_settings;

pub use cms_page::*;
pub use inquiry::*;
pub use main_page::*;
pub use notice::*;
pub use resource::*;
pub use site_content::*;
pub use site_settings::*;
