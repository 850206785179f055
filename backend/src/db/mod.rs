//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all site content; anything the admin
//! console holds in memory is a disposable copy.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

/// Cheap reachability probe.
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Main page composite document: one settings row plus two ordered child tables
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS main_page_settings (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            hero_copy_top TEXT NOT NULL,
            hero_copy_mid TEXT NOT NULL,
            hero_copy_bottom TEXT NOT NULL,
            hero_cta_label TEXT NOT NULL,
            hero_cta_href TEXT NOT NULL,
            about_title TEXT NOT NULL,
            about_body_1 TEXT NOT NULL,
            about_body_2 TEXT NOT NULL,
            about_image_url TEXT NOT NULL,
            solution_title TEXT NOT NULL,
            solution_body_1 TEXT NOT NULL,
            solution_body_2 TEXT NOT NULL,
            solution_step_image_1 TEXT NOT NULL,
            solution_step_image_2 TEXT NOT NULL,
            solution_step_image_3 TEXT NOT NULL,
            footer_address TEXT NOT NULL,
            footer_copyright TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS main_page_slides (
            id TEXT PRIMARY KEY,
            image_url TEXT NOT NULL,
            sort_order INTEGER NOT NULL CHECK (sort_order >= 0),
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS main_page_application_cards (
            id TEXT PRIMARY KEY,
            label TEXT NOT NULL,
            image_url TEXT NOT NULL DEFAULT '',
            link_url TEXT NOT NULL,
            sort_order INTEGER NOT NULL CHECK (sort_order >= 0),
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS public_site_settings (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            payload TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS site_content (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            payload TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS inquiries (
            id TEXT PRIMARY KEY,
            inquiry_type TEXT NOT NULL CHECK (inquiry_type IN ('quote', 'test-demo')),
            company TEXT NOT NULL DEFAULT '',
            position TEXT NOT NULL DEFAULT '',
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            contact_number TEXT NOT NULL DEFAULT '',
            requirements TEXT NOT NULL DEFAULT '',
            consent INTEGER NOT NULL,
            attachment_url TEXT,
            attachment_name TEXT,
            attachment_size INTEGER CHECK (attachment_size IS NULL OR attachment_size >= 0),
            attachment_mime_type TEXT,
            status TEXT NOT NULL CHECK (status IN ('in-review', 'done')),
            is_read INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resources (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            type TEXT NOT NULL CHECK (type IN ('Catalog', 'White Paper', 'Certificate', 'Case Study')),
            file_url TEXT NOT NULL DEFAULT '',
            markdown TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS notices (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            published_at TEXT NOT NULL,
            markdown TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS cms_pages (
            slug TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            image_url TEXT NOT NULL DEFAULT '',
            markdown TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes for common queries
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_slides_sort_order ON main_page_slides(sort_order);
        CREATE INDEX IF NOT EXISTS idx_cards_sort_order ON main_page_application_cards(sort_order);
        CREATE INDEX IF NOT EXISTS idx_inquiries_created_at ON inquiries(created_at);
        CREATE INDEX IF NOT EXISTS idx_inquiries_is_read ON inquiries(is_read);
        CREATE INDEX IF NOT EXISTS idx_resources_updated_at ON resources(updated_at);
        CREATE INDEX IF NOT EXISTS idx_notices_published_at ON notices(published_at);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
