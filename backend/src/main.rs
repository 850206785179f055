//! SHINHOTEK Site Backend
//!
//! REST backend for the public brochure site and its admin console, with
//! SQLite persistence and local-disk file uploads.

mod api;
mod auth;
mod config;
mod db;
mod defaults;
mod errors;
mod models;
mod route_meta;
mod uploads;
mod validation;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::TokenSigner;
use config::Config;
use db::Repository;
use uploads::{BlobStore, LocalBlobStore, UploadKind};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
    pub tokens: Arc<TokenSigner>,
    pub blobs: Arc<dyn BlobStore>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(env_filter);
    if config.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting SHINHOTEK site backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Upload directory: {:?}", config.upload_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.uses_default_credentials() {
        tracing::warn!(
            "Default admin password or token secret in use. Set SH_ADMIN_PASSWORD and SH_TOKEN_SECRET!"
        );
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    db::ping(&pool).await?;
    let repo = Arc::new(Repository::new(pool));
    repo.seed_defaults().await?;

    let state = AppState {
        repo,
        tokens: Arc::new(TokenSigner::from_config(&config)),
        blobs: Arc::new(LocalBlobStore::from_config(&config)),
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origin);

    let tokens = state.tokens.clone();
    // One extra byte lets the blob store report oversize files in the error envelope.
    let inquiry_limit = DefaultBodyLimit::max(state.blobs.max_bytes(UploadKind::Inquiry) + 1);
    let resource_limit = DefaultBodyLimit::max(state.blobs.max_bytes(UploadKind::Resource) + 1);

    // Admin routes (bearer token required)
    let admin_routes = Router::new()
        // Main page
        .route("/main-page", get(api::get_main_page))
        .route("/main-page", put(api::save_main_page))
        .route("/main-page/slides", post(api::append_slide))
        .route("/main-page/slides/{id}", delete(api::remove_slide))
        .route("/main-page/cards", post(api::append_card))
        .route("/main-page/cards/{id}", delete(api::remove_card))
        // Site content
        .route("/content", get(api::get_site_content))
        .route("/content", put(api::save_site_content))
        // Public site settings
        .route("/settings/public", get(api::get_public_settings))
        .route("/settings/public", put(api::save_public_settings))
        // CMS pages
        .route("/cms-pages", get(api::list_cms_pages))
        .route("/cms-pages", post(api::create_cms_page))
        .route("/cms-pages/{slug}", put(api::update_cms_page))
        .route("/cms-pages/{slug}", delete(api::delete_cms_page))
        // Resources
        .route("/resources", post(api::create_resource))
        .route("/resources/{id}", put(api::update_resource))
        .route("/resources/{id}", delete(api::delete_resource))
        // Notices
        .route("/notices", post(api::create_notice))
        .route("/notices/{id}", put(api::update_notice))
        .route("/notices/{id}", delete(api::delete_notice))
        // Inquiries
        .route("/inquiries", get(api::list_inquiries))
        .route("/inquiries/unread-count", get(api::unread_inquiry_count))
        .route("/inquiries/read-all", put(api::mark_all_inquiries_read))
        .route("/inquiries/{id}/status", put(api::update_inquiry_status))
        // Uploads
        .route(
            "/uploads/resource",
            post(api::upload_resource_file).layer(resource_limit),
        )
        .layer(middleware::from_fn(move |req, next| {
            auth::admin_auth_layer(tokens.clone(), req, next)
        }));

    // Public routes
    let api_routes = Router::new()
        .route("/auth/login", post(api::login))
        .route("/main-page", get(api::get_main_page))
        .route("/content", get(api::get_site_content))
        .route("/settings/public", get(api::get_public_settings))
        .route("/route-meta", get(api::get_route_meta))
        .route("/cms-pages/{slug}", get(api::get_cms_page))
        .route("/resources", get(api::list_resources))
        .route("/notices", get(api::list_notices))
        .route("/inquiries", post(api::create_inquiry))
        .route(
            "/uploads/inquiry",
            post(api::upload_inquiry_file).layer(inquiry_limit),
        )
        .nest_service("/files", ServeDir::new(&state.config.upload_dir))
        .nest("/admin", admin_routes);

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        match HeaderValue::from_str(origin) {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                tracing::warn!("Invalid SH_CORS_ORIGIN {:?}, allowing any origin", origin);
                AllowOrigin::any()
            }
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
