//! Database repository for CRUD operations.
//!
//! Uses prepared statements throughout; the main page write is the only
//! multi-statement transaction.

use chrono::{NaiveDate, SecondsFormat, Utc};
use sqlx::{Row, SqlitePool};

use crate::defaults::{
    default_cms_pages, default_main_page_content, default_public_site_settings,
    default_site_content,
};
use crate::errors::AppError;
use crate::models::{
    CmsPage, CmsPageCreateRequest, CmsPageUpdateRequest, InquiryCreateRequest, InquiryItem,
    InquiryStatus, InquiryType, MainPageApplicationCard, MainPageContent, MainPageSettings,
    MainPageSlide, NoticeItem, NoticeUpsertRequest, PublicSiteSettings, ResourceItem,
    ResourceType, ResourceUpsertRequest, SiteContent,
};

/// Fixed-width UTC timestamp; lexical order equals chronological order.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

const INQUIRY_COLUMNS: &str = "id, inquiry_type, company, position, name, email, contact_number, \
     requirements, consent, attachment_url, attachment_name, attachment_size, \
     attachment_mime_type, status, is_read, created_at";

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Write built-in content into any empty singleton or page table.
    pub async fn seed_defaults(&self) -> Result<(), AppError> {
        if self.count("main_page_settings").await? == 0 {
            tracing::info!("Seeding default main page content");
            self.save_main_page_content(default_main_page_content())
                .await?;
        }

        if self.count("public_site_settings").await? == 0 {
            tracing::info!("Seeding default public site settings");
            self.save_public_site_settings(&default_public_site_settings())
                .await?;
        }

        if self.count("site_content").await? == 0 {
            tracing::info!("Seeding default site content");
            self.save_site_content(&default_site_content()).await?;
        }

        if self.count("cms_pages").await? == 0 {
            tracing::info!("Seeding default CMS pages");
            for page in default_cms_pages() {
                sqlx::query(
                    "INSERT INTO cms_pages (slug, title, image_url, markdown, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?) ON CONFLICT(slug) DO NOTHING",
                )
                .bind(&page.slug)
                .bind(&page.title)
                .bind(&page.image_url)
                .bind(&page.markdown)
                .bind(&page.updated_at)
                .bind(&page.updated_at)
                .execute(&self.pool)
                .await?;
            }
        }

        Ok(())
    }

    async fn count(&self, table: &'static str) -> Result<i64, AppError> {
        let row = sqlx::query(&format!("SELECT COUNT(*) AS count FROM {}", table))
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("count"))
    }

    // ==================== MAIN PAGE OPERATIONS ====================

    /// Read the whole main page document.
    pub async fn get_main_page_content(&self) -> Result<MainPageContent, AppError> {
        let settings_row = sqlx::query(
            r#"SELECT hero_copy_top, hero_copy_mid, hero_copy_bottom, hero_cta_label, hero_cta_href,
                      about_title, about_body_1, about_body_2, about_image_url,
                      solution_title, solution_body_1, solution_body_2,
                      solution_step_image_1, solution_step_image_2, solution_step_image_3,
                      footer_address, footer_copyright
               FROM main_page_settings WHERE id = 1"#,
        )
        .fetch_optional(&self.pool)
        .await?;

        let settings = settings_row
            .as_ref()
            .map(main_page_settings_from_row)
            .ok_or_else(|| AppError::NotFound("Main page settings not found".to_string()))?;

        let slides = sqlx::query(
            "SELECT id, image_url, sort_order FROM main_page_slides ORDER BY sort_order ASC, rowid ASC",
        )
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(slide_from_row)
        .collect();

        let application_cards = sqlx::query(
            "SELECT id, label, image_url, link_url, sort_order FROM main_page_application_cards ORDER BY sort_order ASC, rowid ASC",
        )
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(card_from_row)
        .collect();

        Ok(MainPageContent {
            settings,
            slides,
            application_cards,
        })
    }

    /// Replace the main page document in one transaction.
    ///
    /// Sort orders are re-derived from array position before anything is
    /// written. Any failure drops the transaction, which rolls it back.
    pub async fn save_main_page_content(
        &self,
        content: MainPageContent,
    ) -> Result<MainPageContent, AppError> {
        let content = content.normalized();
        let now = now_timestamp();
        let s = &content.settings;

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"INSERT INTO main_page_settings (
                    id, hero_copy_top, hero_copy_mid, hero_copy_bottom, hero_cta_label, hero_cta_href,
                    about_title, about_body_1, about_body_2, about_image_url,
                    solution_title, solution_body_1, solution_body_2,
                    solution_step_image_1, solution_step_image_2, solution_step_image_3,
                    footer_address, footer_copyright, updated_at
               ) VALUES (1, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(id) DO UPDATE SET
                    hero_copy_top = excluded.hero_copy_top,
                    hero_copy_mid = excluded.hero_copy_mid,
                    hero_copy_bottom = excluded.hero_copy_bottom,
                    hero_cta_label = excluded.hero_cta_label,
                    hero_cta_href = excluded.hero_cta_href,
                    about_title = excluded.about_title,
                    about_body_1 = excluded.about_body_1,
                    about_body_2 = excluded.about_body_2,
                    about_image_url = excluded.about_image_url,
                    solution_title = excluded.solution_title,
                    solution_body_1 = excluded.solution_body_1,
                    solution_body_2 = excluded.solution_body_2,
                    solution_step_image_1 = excluded.solution_step_image_1,
                    solution_step_image_2 = excluded.solution_step_image_2,
                    solution_step_image_3 = excluded.solution_step_image_3,
                    footer_address = excluded.footer_address,
                    footer_copyright = excluded.footer_copyright,
                    updated_at = excluded.updated_at"#,
        )
        .bind(&s.hero_copy_top)
        .bind(&s.hero_copy_mid)
        .bind(&s.hero_copy_bottom)
        .bind(&s.hero_cta_label)
        .bind(&s.hero_cta_href)
        .bind(&s.about_title)
        .bind(&s.about_body_1)
        .bind(&s.about_body_2)
        .bind(&s.about_image_url)
        .bind(&s.solution_title)
        .bind(&s.solution_body_1)
        .bind(&s.solution_body_2)
        .bind(&s.solution_step_image_1)
        .bind(&s.solution_step_image_2)
        .bind(&s.solution_step_image_3)
        .bind(&s.footer_address)
        .bind(&s.footer_copyright)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM main_page_slides")
            .execute(&mut *tx)
            .await?;
        for slide in &content.slides {
            sqlx::query(
                "INSERT INTO main_page_slides (id, image_url, sort_order, created_at) VALUES (?, ?, ?, ?)",
            )
            .bind(&slide.id)
            .bind(&slide.image_url)
            .bind(slide.sort_order)
            .bind(&now)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("DELETE FROM main_page_application_cards")
            .execute(&mut *tx)
            .await?;
        for card in &content.application_cards {
            sqlx::query(
                "INSERT INTO main_page_application_cards (id, label, image_url, link_url, sort_order, created_at) VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(&card.id)
            .bind(&card.label)
            .bind(&card.image_url)
            .bind(&card.link_url)
            .bind(card.sort_order)
            .bind(&now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            slides = content.slides.len(),
            cards = content.application_cards.len(),
            "Saved main page content"
        );

        self.get_main_page_content().await
    }

    // ==================== PUBLIC SITE SETTINGS ====================

    pub async fn get_public_site_settings(&self) -> Result<PublicSiteSettings, AppError> {
        let row = sqlx::query("SELECT payload FROM public_site_settings WHERE id = 1")
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Public site settings not found".to_string()))?;

        let payload: String = row.get("payload");
        serde_json::from_str(&payload).map_err(|e| {
            tracing::error!("Stored public site settings are unreadable: {}", e);
            AppError::Internal("Stored public site settings are unreadable".to_string())
        })
    }

    pub async fn save_public_site_settings(
        &self,
        settings: &PublicSiteSettings,
    ) -> Result<PublicSiteSettings, AppError> {
        let payload = serde_json::to_string(settings)?;

        sqlx::query(
            r#"INSERT INTO public_site_settings (id, payload, updated_at) VALUES (1, ?, ?)
               ON CONFLICT(id) DO UPDATE SET payload = excluded.payload, updated_at = excluded.updated_at"#,
        )
        .bind(&payload)
        .bind(now_timestamp())
        .execute(&self.pool)
        .await?;

        Ok(settings.clone())
    }

    // ==================== SITE CONTENT ====================

    pub async fn get_site_content(&self) -> Result<SiteContent, AppError> {
        let row = sqlx::query("SELECT payload FROM site_content WHERE id = 1")
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Site content not found".to_string()))?;

        let payload: String = row.get("payload");
        serde_json::from_str(&payload).map_err(|e| {
            tracing::error!("Stored site content is unreadable: {}", e);
            AppError::Internal("Stored site content is unreadable".to_string())
        })
    }

    pub async fn save_site_content(&self, content: &SiteContent) -> Result<SiteContent, AppError> {
        let payload = serde_json::to_string(content)?;

        sqlx::query(
            r#"INSERT INTO site_content (id, payload, updated_at) VALUES (1, ?, ?)
               ON CONFLICT(id) DO UPDATE SET payload = excluded.payload, updated_at = excluded.updated_at"#,
        )
        .bind(&payload)
        .bind(now_timestamp())
        .execute(&self.pool)
        .await?;

        Ok(content.clone())
    }

    // ==================== INQUIRY OPERATIONS ====================

    /// List all inquiries, newest first.
    pub async fn list_inquiries(&self) -> Result<Vec<InquiryItem>, AppError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM inquiries ORDER BY created_at DESC, rowid DESC",
            INQUIRY_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(inquiry_from_row).collect())
    }

    pub async fn get_inquiry(&self, id: &str) -> Result<Option<InquiryItem>, AppError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM inquiries WHERE id = ?",
            INQUIRY_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(inquiry_from_row))
    }

    /// Store a new inquiry. Id, status, read flag and timestamp are server-owned.
    pub async fn create_inquiry(
        &self,
        request: &InquiryCreateRequest,
    ) -> Result<InquiryItem, AppError> {
        let item = InquiryItem {
            id: uuid::Uuid::new_v4().to_string(),
            inquiry_type: request.inquiry_type,
            company: request.company.trim().to_string(),
            position: request.position.trim().to_string(),
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            contact_number: request.contact_number.trim().to_string(),
            requirements: request.requirements.clone(),
            consent: request.consent,
            attachment_url: non_empty(&request.attachment_url),
            attachment_name: non_empty(&request.attachment_name),
            attachment_size: request.attachment_size,
            attachment_mime_type: non_empty(&request.attachment_mime_type),
            status: InquiryStatus::InReview,
            is_read: false,
            created_at: now_timestamp(),
        };

        sqlx::query(&format!(
            "INSERT INTO inquiries ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            INQUIRY_COLUMNS
        ))
        .bind(&item.id)
        .bind(item.inquiry_type.as_str())
        .bind(&item.company)
        .bind(&item.position)
        .bind(&item.name)
        .bind(&item.email)
        .bind(&item.contact_number)
        .bind(&item.requirements)
        .bind(item.consent as i32)
        .bind(&item.attachment_url)
        .bind(&item.attachment_name)
        .bind(item.attachment_size)
        .bind(&item.attachment_mime_type)
        .bind(item.status.as_str())
        .bind(item.is_read as i32)
        .bind(&item.created_at)
        .execute(&self.pool)
        .await?;

        Ok(item)
    }

    /// Change an inquiry's status, marking it read in the same statement.
    ///
    /// Concurrent updates are last-write-wins; the write itself refuses the
    /// one move the lifecycle forbids (`done` back to `in-review`).
    pub async fn update_inquiry_status(
        &self,
        id: &str,
        requested: InquiryStatus,
    ) -> Result<InquiryItem, AppError> {
        let existing = self
            .get_inquiry(id)
            .await?
            .ok_or_else(|| inquiry_not_found(id))?;

        let change = existing.status.transition_to(requested)?;

        let result = sqlx::query(
            "UPDATE inquiries SET status = ?, is_read = ? WHERE id = ? AND NOT (status = ? AND ? = ?)",
        )
        .bind(change.status.as_str())
        .bind(change.is_read as i32)
        .bind(id)
        .bind(InquiryStatus::Done.as_str())
        .bind(change.status.as_str())
        .bind(InquiryStatus::InReview.as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            // Deleted, or finished by another request since the read.
            let current = self
                .get_inquiry(id)
                .await?
                .ok_or_else(|| inquiry_not_found(id))?;
            current.status.transition_to(requested)?;
        }

        Ok(InquiryItem {
            status: change.status,
            is_read: change.is_read,
            ..existing
        })
    }

    pub async fn count_unread_inquiries(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM inquiries WHERE is_read = 0")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("count"))
    }

    /// Mark every unread inquiry read; returns how many changed.
    pub async fn mark_all_inquiries_read(&self) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE inquiries SET is_read = 1 WHERE is_read = 0")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // ==================== RESOURCE OPERATIONS ====================

    /// List resources, most recently modified first.
    pub async fn list_resources(&self) -> Result<Vec<ResourceItem>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, type, file_url, markdown FROM resources ORDER BY updated_at DESC, created_at DESC, rowid DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(resource_from_row).collect())
    }

    pub async fn create_resource(
        &self,
        request: &ResourceUpsertRequest,
    ) -> Result<ResourceItem, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = now_timestamp();

        sqlx::query(
            "INSERT INTO resources (id, title, type, file_url, markdown, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(request.title.trim())
        .bind(request.resource_type.as_str())
        .bind(&request.file_url)
        .bind(&request.markdown)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(ResourceItem {
            id,
            title: request.title.trim().to_string(),
            resource_type: request.resource_type,
            file_url: request.file_url.clone(),
            markdown: request.markdown.clone(),
        })
    }

    /// Update a resource. `None` when the id does not exist.
    pub async fn update_resource(
        &self,
        id: &str,
        request: &ResourceUpsertRequest,
    ) -> Result<Option<ResourceItem>, AppError> {
        let result = sqlx::query(
            "UPDATE resources SET title = ?, type = ?, file_url = ?, markdown = ?, updated_at = ? WHERE id = ?",
        )
        .bind(request.title.trim())
        .bind(request.resource_type.as_str())
        .bind(&request.file_url)
        .bind(&request.markdown)
        .bind(now_timestamp())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(ResourceItem {
            id: id.to_string(),
            title: request.title.trim().to_string(),
            resource_type: request.resource_type,
            file_url: request.file_url.clone(),
            markdown: request.markdown.clone(),
        }))
    }

    /// Delete a resource; `false` when nothing was there.
    pub async fn delete_resource(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM resources WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ==================== NOTICE OPERATIONS ====================

    /// List notices by publication date, newest first.
    pub async fn list_notices(&self) -> Result<Vec<NoticeItem>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, published_at, markdown FROM notices ORDER BY published_at DESC, updated_at DESC, created_at DESC, rowid DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(notice_from_row).collect())
    }

    pub async fn create_notice(&self, request: &NoticeUpsertRequest) -> Result<NoticeItem, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = now_timestamp();

        sqlx::query(
            "INSERT INTO notices (id, title, published_at, markdown, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(request.title.trim())
        .bind(request.published_at)
        .bind(&request.markdown)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(NoticeItem {
            id,
            title: request.title.trim().to_string(),
            published_at: request.published_at,
            markdown: request.markdown.clone(),
        })
    }

    pub async fn update_notice(
        &self,
        id: &str,
        request: &NoticeUpsertRequest,
    ) -> Result<Option<NoticeItem>, AppError> {
        let result = sqlx::query(
            "UPDATE notices SET title = ?, published_at = ?, markdown = ?, updated_at = ? WHERE id = ?",
        )
        .bind(request.title.trim())
        .bind(request.published_at)
        .bind(&request.markdown)
        .bind(now_timestamp())
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(NoticeItem {
            id: id.to_string(),
            title: request.title.trim().to_string(),
            published_at: request.published_at,
            markdown: request.markdown.clone(),
        }))
    }

    pub async fn delete_notice(&self, id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM notices WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ==================== CMS PAGE OPERATIONS ====================

    pub async fn list_cms_pages(&self) -> Result<Vec<CmsPage>, AppError> {
        let rows = sqlx::query(
            "SELECT slug, title, image_url, markdown, updated_at FROM cms_pages ORDER BY slug ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(cms_page_from_row).collect())
    }

    pub async fn get_cms_page(&self, slug: &str) -> Result<Option<CmsPage>, AppError> {
        let row = sqlx::query(
            "SELECT slug, title, image_url, markdown, updated_at FROM cms_pages WHERE slug = ?",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(cms_page_from_row))
    }

    /// Create a page. Fails with `Conflict` if the slug is taken.
    pub async fn create_cms_page(&self, request: &CmsPageCreateRequest) -> Result<CmsPage, AppError> {
        let now = now_timestamp();

        let result = sqlx::query(
            "INSERT INTO cms_pages (slug, title, image_url, markdown, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?) ON CONFLICT(slug) DO NOTHING",
        )
        .bind(&request.slug)
        .bind(request.title.trim())
        .bind(&request.image_url)
        .bind(&request.markdown)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(format!(
                "CMS page '{}' already exists",
                request.slug
            )));
        }

        Ok(CmsPage {
            slug: request.slug.clone(),
            title: request.title.trim().to_string(),
            image_url: request.image_url.clone(),
            markdown: request.markdown.clone(),
            updated_at: now,
        })
    }

    /// Update a page by slug and refresh `updated_at`. `None` when absent.
    pub async fn update_cms_page(
        &self,
        slug: &str,
        request: &CmsPageUpdateRequest,
    ) -> Result<Option<CmsPage>, AppError> {
        let now = now_timestamp();

        let result = sqlx::query(
            "UPDATE cms_pages SET title = ?, image_url = ?, markdown = ?, updated_at = ? WHERE slug = ?",
        )
        .bind(request.title.trim())
        .bind(&request.image_url)
        .bind(&request.markdown)
        .bind(&now)
        .bind(slug)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(CmsPage {
            slug: slug.to_string(),
            title: request.title.trim().to_string(),
            image_url: request.image_url.clone(),
            markdown: request.markdown.clone(),
            updated_at: now,
        }))
    }

    pub async fn delete_cms_page(&self, slug: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cms_pages WHERE slug = ?")
            .bind(slug)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// Helper functions for row conversion

fn inquiry_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Inquiry {} not found", id))
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn main_page_settings_from_row(row: &sqlx::sqlite::SqliteRow) -> MainPageSettings {
    MainPageSettings {
        hero_copy_top: row.get("hero_copy_top"),
        hero_copy_mid: row.get("hero_copy_mid"),
        hero_copy_bottom: row.get("hero_copy_bottom"),
        hero_cta_label: row.get("hero_cta_label"),
        hero_cta_href: row.get("hero_cta_href"),
        about_title: row.get("about_title"),
        about_body_1: row.get("about_body_1"),
        about_body_2: row.get("about_body_2"),
        about_image_url: row.get("about_image_url"),
        solution_title: row.get("solution_title"),
        solution_body_1: row.get("solution_body_1"),
        solution_body_2: row.get("solution_body_2"),
        solution_step_image_1: row.get("solution_step_image_1"),
        solution_step_image_2: row.get("solution_step_image_2"),
        solution_step_image_3: row.get("solution_step_image_3"),
        footer_address: row.get("footer_address"),
        footer_copyright: row.get("footer_copyright"),
    }
}

fn slide_from_row(row: &sqlx::sqlite::SqliteRow) -> MainPageSlide {
    MainPageSlide {
        id: row.get("id"),
        image_url: row.get("image_url"),
        sort_order: row.get("sort_order"),
    }
}

fn card_from_row(row: &sqlx::sqlite::SqliteRow) -> MainPageApplicationCard {
    MainPageApplicationCard {
        id: row.get("id"),
        label: row.get("label"),
        image_url: row.get("image_url"),
        link_url: row.get("link_url"),
        sort_order: row.get("sort_order"),
    }
}

fn inquiry_from_row(row: &sqlx::sqlite::SqliteRow) -> InquiryItem {
    let inquiry_type: String = row.get("inquiry_type");
    let status: String = row.get("status");
    let consent: i32 = row.get("consent");
    let is_read: i32 = row.get("is_read");

    InquiryItem {
        id: row.get("id"),
        // CHECK constraints keep both columns inside their enums
        inquiry_type: InquiryType::parse(&inquiry_type).unwrap_or_default(),
        company: row.get("company"),
        position: row.get("position"),
        name: row.get("name"),
        email: row.get("email"),
        contact_number: row.get("contact_number"),
        requirements: row.get("requirements"),
        consent: consent != 0,
        attachment_url: row.get("attachment_url"),
        attachment_name: row.get("attachment_name"),
        attachment_size: row.get("attachment_size"),
        attachment_mime_type: row.get("attachment_mime_type"),
        status: InquiryStatus::parse(&status).unwrap_or(InquiryStatus::InReview),
        is_read: is_read != 0,
        created_at: row.get("created_at"),
    }
}

fn resource_from_row(row: &sqlx::sqlite::SqliteRow) -> ResourceItem {
    let resource_type: String = row.get("type");
    ResourceItem {
        id: row.get("id"),
        title: row.get("title"),
        resource_type: ResourceType::parse(&resource_type).unwrap_or(ResourceType::Catalog),
        file_url: row.get("file_url"),
        markdown: row.get("markdown"),
    }
}

fn notice_from_row(row: &sqlx::sqlite::SqliteRow) -> NoticeItem {
    let published_at: NaiveDate = row.get("published_at");
    NoticeItem {
        id: row.get("id"),
        title: row.get("title"),
        published_at,
        markdown: row.get("markdown"),
    }
}

fn cms_page_from_row(row: &sqlx::sqlite::SqliteRow) -> CmsPage {
    CmsPage {
        slug: row.get("slug"),
        title: row.get("title"),
        image_url: row.get("image_url"),
        markdown: row.get("markdown"),
        updated_at: row.get("updated_at"),
    }
}
