//! Main page composite document: singleton settings plus ordered slides and cards.

use serde::{Deserialize, Serialize};

/// Slides and cards each keep at least this many entries.
pub const MIN_COLLECTION_LEN: usize = 1;

/// Default link for a freshly added application card.
pub const DEFAULT_CARD_LINK: &str = "/product";

/// Free-text settings for the main page. Exactly one row exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MainPageSettings {
    pub hero_copy_top: String,
    pub hero_copy_mid: String,
    pub hero_copy_bottom: String,
    pub hero_cta_label: String,
    pub hero_cta_href: String,
    pub about_title: String,
    pub about_body_1: String,
    pub about_body_2: String,
    pub about_image_url: String,
    pub solution_title: String,
    pub solution_body_1: String,
    pub solution_body_2: String,
    pub solution_step_image_1: String,
    pub solution_step_image_2: String,
    pub solution_step_image_3: String,
    pub footer_address: String,
    pub footer_copyright: String,
}

impl MainPageSettings {
    /// Every field paired with its wire name, in declaration order.
    pub fn fields(&self) -> [(&'static str, &str); 17] {
        [
            ("heroCopyTop", self.hero_copy_top.as_str()),
            ("heroCopyMid", self.hero_copy_mid.as_str()),
            ("heroCopyBottom", self.hero_copy_bottom.as_str()),
            ("heroCtaLabel", self.hero_cta_label.as_str()),
            ("heroCtaHref", self.hero_cta_href.as_str()),
            ("aboutTitle", self.about_title.as_str()),
            ("aboutBody1", self.about_body_1.as_str()),
            ("aboutBody2", self.about_body_2.as_str()),
            ("aboutImageUrl", self.about_image_url.as_str()),
            ("solutionTitle", self.solution_title.as_str()),
            ("solutionBody1", self.solution_body_1.as_str()),
            ("solutionBody2", self.solution_body_2.as_str()),
            ("solutionStepImage1", self.solution_step_image_1.as_str()),
            ("solutionStepImage2", self.solution_step_image_2.as_str()),
            ("solutionStepImage3", self.solution_step_image_3.as_str()),
            ("footerAddress", self.footer_address.as_str()),
            ("footerCopyright", self.footer_copyright.as_str()),
        ]
    }
}

/// A hero carousel image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MainPageSlide {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub sort_order: u32,
}

/// A card in the "applications" strip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MainPageApplicationCard {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub link_url: String,
    #[serde(default)]
    pub sort_order: u32,
}

/// The whole main page document. Read and written as one unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MainPageContent {
    pub settings: MainPageSettings,
    pub slides: Vec<MainPageSlide>,
    pub application_cards: Vec<MainPageApplicationCard>,
}

/// Outcome of removing a slide or card from an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
    /// Refused: the entry is the last one left.
    LastRemaining,
}

impl MainPageContent {
    /// Re-derive `sortOrder` from array position and fill in missing ids.
    ///
    /// Submitted sort values are discarded; the array order is authoritative.
    pub fn normalized(mut self) -> Self {
        for (index, slide) in self.slides.iter_mut().enumerate() {
            slide.sort_order = index as u32;
            if slide.id.trim().is_empty() {
                slide.id = new_item_id();
            }
        }
        for (index, card) in self.application_cards.iter_mut().enumerate() {
            card.sort_order = index as u32;
            if card.id.trim().is_empty() {
                card.id = new_item_id();
            }
        }
        self
    }

    /// Append an empty slide at the end and return it.
    pub fn add_slide(&mut self) -> &MainPageSlide {
        let sort_order = self.slides.len() as u32;
        self.slides.push(MainPageSlide {
            id: new_item_id(),
            image_url: String::new(),
            sort_order,
        });
        &self.slides[self.slides.len() - 1]
    }

    pub fn remove_slide(&mut self, id: &str) -> RemoveOutcome {
        remove_guarded(&mut self.slides, |s| s.id == id)
    }

    /// Append a card linking to the product catalog and return it.
    pub fn add_card(&mut self) -> &MainPageApplicationCard {
        let sort_order = self.application_cards.len() as u32;
        self.application_cards.push(MainPageApplicationCard {
            id: new_item_id(),
            label: String::new(),
            image_url: String::new(),
            link_url: DEFAULT_CARD_LINK.to_string(),
            sort_order,
        });
        &self.application_cards[self.application_cards.len() - 1]
    }

    pub fn remove_card(&mut self, id: &str) -> RemoveOutcome {
        remove_guarded(&mut self.application_cards, |c| c.id == id)
    }
}

fn remove_guarded<T>(items: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> RemoveOutcome {
    let Some(position) = items.iter().position(matches) else {
        return RemoveOutcome::NotFound;
    };
    if items.len() <= MIN_COLLECTION_LEN {
        return RemoveOutcome::LastRemaining;
    }
    items.remove(position);
    RemoveOutcome::Removed
}

fn new_item_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_main_page_content;

    fn slide(id: &str, sort_order: u32) -> MainPageSlide {
        MainPageSlide {
            id: id.to_string(),
            image_url: format!("/img/{}.jpg", id),
            sort_order,
        }
    }

    #[test]
    fn test_normalize_uses_array_position() {
        let mut content = default_main_page_content();
        content.slides = vec![slide("a", 5), slide("b", 2), slide("c", 2)];

        let content = content.normalized();
        let order: Vec<(&str, u32)> = content
            .slides
            .iter()
            .map(|s| (s.id.as_str(), s.sort_order))
            .collect();
        assert_eq!(order, vec![("a", 0), ("b", 1), ("c", 2)]);
    }

    #[test]
    fn test_normalize_assigns_missing_ids() {
        let mut content = default_main_page_content();
        content.slides = vec![slide("", 0), slide("keep", 1)];

        let content = content.normalized();
        assert!(!content.slides[0].id.is_empty());
        assert_eq!(content.slides[1].id, "keep");
    }

    #[test]
    fn test_add_slide_appends_empty_entry() {
        let mut content = default_main_page_content();
        let before = content.slides.len();
        let added = content.add_slide().clone();

        assert_eq!(added.sort_order as usize, before);
        assert!(added.image_url.is_empty());
        assert_eq!(content.slides.len(), before + 1);
    }

    #[test]
    fn test_add_card_defaults_link() {
        let mut content = default_main_page_content();
        let added = content.add_card().clone();
        assert_eq!(added.link_url, DEFAULT_CARD_LINK);
    }

    #[test]
    fn test_last_slide_cannot_be_removed() {
        let mut content = default_main_page_content();
        content.slides = vec![slide("only", 0)];

        assert_eq!(content.remove_slide("only"), RemoveOutcome::LastRemaining);
        assert_eq!(content.slides.len(), 1);
    }

    #[test]
    fn test_remove_card() {
        let mut content = default_main_page_content();
        let first = content.application_cards[0].id.clone();
        let before = content.application_cards.len();

        assert_eq!(content.remove_card(&first), RemoveOutcome::Removed);
        assert_eq!(content.application_cards.len(), before - 1);
        assert_eq!(content.remove_card(&first), RemoveOutcome::NotFound);
    }
}
