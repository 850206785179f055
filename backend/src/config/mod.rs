//! Configuration module for the site backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.
//! The resulting [`Config`] is passed explicitly into the auth layer, the blob
//! store and the router; nothing reads the environment after startup.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// Default lifetime of an admin token (8 hours).
const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60 * 8;
/// Default upload limit for inquiry attachments (10 MiB).
const DEFAULT_MAX_INQUIRY_FILE_BYTES: usize = 10 * 1024 * 1024;
/// Default upload limit for resource library files (30 MiB).
const DEFAULT_MAX_RESOURCE_FILE_BYTES: usize = 30 * 1024 * 1024;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of the human-readable format
    pub log_json: bool,
    /// Admin console login name
    pub admin_username: String,
    /// Admin console password
    pub admin_password: String,
    /// HMAC secret used to sign admin tokens
    pub token_secret: String,
    /// Admin token lifetime in seconds
    pub token_ttl_secs: i64,
    /// Root directory for uploaded files
    pub upload_dir: PathBuf,
    pub max_inquiry_file_bytes: usize,
    pub max_resource_file_bytes: usize,
    /// Allowed CORS origin; `*` allows any origin
    pub cors_origin: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("SH_DB_PATH")
            .unwrap_or_else(|_| "./data/site.sqlite".to_string())
            .into();

        let bind_addr = env::var("SH_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .expect("Invalid SH_BIND_ADDR format");

        let log_level = env::var("SH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_json = parse_or("SH_LOG_JSON", false);

        let admin_username = env::var("SH_ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let admin_password =
            env::var("SH_ADMIN_PASSWORD").unwrap_or_else(|_| "change-me".to_string());
        let token_secret = env::var("SH_TOKEN_SECRET")
            .unwrap_or_else(|_| "replace-this-in-production".to_string());
        let token_ttl_secs = parse_positive("SH_TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS);

        let upload_dir = env::var("SH_UPLOAD_DIR")
            .unwrap_or_else(|_| "./data/uploads".to_string())
            .into();
        let max_inquiry_file_bytes =
            parse_positive("SH_MAX_INQUIRY_FILE_BYTES", DEFAULT_MAX_INQUIRY_FILE_BYTES);
        let max_resource_file_bytes =
            parse_positive("SH_MAX_RESOURCE_FILE_BYTES", DEFAULT_MAX_RESOURCE_FILE_BYTES);

        let cors_origin = env::var("SH_CORS_ORIGIN").unwrap_or_else(|_| "*".to_string());

        Self {
            db_path,
            bind_addr,
            log_level,
            log_json,
            admin_username,
            admin_password,
            token_secret,
            token_ttl_secs,
            upload_dir,
            max_inquiry_file_bytes,
            max_resource_file_bytes,
            cors_origin,
        }
    }

    /// True while the shipped placeholder credentials are still in use.
    pub fn uses_default_credentials(&self) -> bool {
        self.admin_password == "change-me" || self.token_secret == "replace-this-in-production"
    }
}

/// Parse a variable, falling back to `default` when unset or malformed.
fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} value {:?}, using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}

/// Like [`parse_or`] but also rejects zero and negative values.
fn parse_positive<T>(key: &str, default: T) -> T
where
    T: FromStr + PartialOrd + Default + Copy,
{
    let value = parse_or(key, default);
    if value > T::default() {
        value
    } else {
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        for key in [
            "SH_DB_PATH",
            "SH_BIND_ADDR",
            "SH_LOG_LEVEL",
            "SH_LOG_JSON",
            "SH_ADMIN_USERNAME",
            "SH_ADMIN_PASSWORD",
            "SH_TOKEN_SECRET",
            "SH_TOKEN_TTL_SECS",
            "SH_UPLOAD_DIR",
            "SH_MAX_INQUIRY_FILE_BYTES",
            "SH_MAX_RESOURCE_FILE_BYTES",
            "SH_CORS_ORIGIN",
        ] {
            env::remove_var(key);
        }

        let config = Config::from_env();

        assert_eq!(config.db_path, PathBuf::from("./data/site.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert_eq!(config.admin_username, "admin");
        assert_eq!(config.token_ttl_secs, 8 * 60 * 60);
        assert_eq!(config.max_inquiry_file_bytes, 10 * 1024 * 1024);
        assert_eq!(config.max_resource_file_bytes, 30 * 1024 * 1024);
        assert_eq!(config.cors_origin, "*");
        assert!(config.uses_default_credentials());
    }

    #[test]
    fn test_parse_positive_rejects_zero() {
        env::set_var("SH_TEST_POSITIVE_ZERO", "0");
        assert_eq!(parse_positive("SH_TEST_POSITIVE_ZERO", 42usize), 42);
        env::set_var("SH_TEST_POSITIVE_GARBAGE", "abc");
        assert_eq!(parse_positive("SH_TEST_POSITIVE_GARBAGE", 7i64), 7);
        env::set_var("SH_TEST_POSITIVE_OK", "15");
        assert_eq!(parse_positive("SH_TEST_POSITIVE_OK", 7i64), 15);
    }
}
