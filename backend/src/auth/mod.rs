//! Admin authentication.
//!
//! Login checks the configured credentials in constant time and issues an
//! HS256-signed token; admin routes sit behind [`admin_auth_layer`].

use std::sync::Arc;

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, SecondsFormat, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::config::Config;
use crate::errors::AppError;

/// Claims carried by an admin token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Admin login name
    pub sub: String,
    /// Issued-at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds)
    pub exp: i64,
}

/// A freshly issued token and its expiry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: String,
}

/// Issues and verifies admin tokens with a secret taken from [`Config`].
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
    admin_username: String,
    admin_password: String,
}

impl TokenSigner {
    pub fn new(secret: &str, ttl_secs: i64, admin_username: &str, admin_password: &str) -> Self {
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs,
            admin_username: admin_username.to_string(),
            admin_password: admin_password.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.token_secret,
            config.token_ttl_secs,
            &config.admin_username,
            &config.admin_password,
        )
    }

    /// Check a username/password pair against the configured admin account.
    pub fn check_credentials(&self, username: &str, password: &str) -> bool {
        // Evaluate both so timing does not reveal which one mismatched.
        let user_ok = constant_time_compare(username, &self.admin_username);
        let pass_ok = constant_time_compare(password, &self.admin_password);
        user_ok & pass_ok
    }

    pub fn issue(&self, subject: &str) -> Result<IssuedToken, AppError> {
        self.issue_at(subject, Utc::now())
    }

    fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        let iat = now.timestamp();
        let exp = iat + self.ttl_secs;
        let claims = Claims {
            sub: subject.to_string(),
            iat,
            exp,
        };

        let token = encode(&Header::default(), &claims, &self.encoding).map_err(|e| {
            tracing::error!("Failed to sign admin token: {}", e);
            AppError::Internal("Failed to issue token".to_string())
        })?;

        let expires_at = DateTime::<Utc>::from_timestamp(exp, 0)
            .unwrap_or(now)
            .to_rfc3339_opts(SecondsFormat::Secs, true);

        Ok(IssuedToken { token, expires_at })
    }

    /// Validate signature and expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Rejected admin token: {}", e);
                AppError::Unauthorized("Invalid or expired token".to_string())
            })
    }
}

/// Middleware for `/api/admin`: requires `Authorization: Bearer <token>`.
pub async fn admin_auth_layer(tokens: Arc<TokenSigner>, request: Request, next: Next) -> Response {
    let bearer = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim);

    let Some(token) = bearer else {
        return AppError::Unauthorized("Missing bearer token".to_string()).into_response();
    };

    match tokens.verify(token) {
        Ok(claims) => {
            tracing::debug!(user = %claims.sub, "Admin request authorized");
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!("Admin request rejected: {}", e);
            e.into_response()
        }
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> TokenSigner {
        TokenSigner::new("test-secret-that-is-long-enough", 60, "admin", "pw")
    }

    #[test]
    fn test_issue_and_verify() {
        let tokens = signer();
        let issued = tokens.issue("admin").unwrap();
        let claims = tokens.verify(&issued.token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.exp - claims.iat, 60);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let tokens = signer();
        let issued = tokens
            .issue_at("admin", Utc::now() - chrono::Duration::seconds(120))
            .unwrap();
        assert!(matches!(
            tokens.verify(&issued.token),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let other = TokenSigner::new("some-other-secret-value", 60, "admin", "pw");
        let issued = other.issue("admin").unwrap();
        assert!(signer().verify(&issued.token).is_err());
        assert!(signer().verify("not-a-token").is_err());
    }

    #[test]
    fn test_check_credentials() {
        let tokens = signer();
        assert!(tokens.check_credentials("admin", "pw"));
        assert!(!tokens.check_credentials("admin", "wrong"));
        assert!(!tokens.check_credentials("root", "pw"));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("test-key-123", "test-key-123"));
        assert!(!constant_time_compare("test-key-123", "test-key-124"));
        assert!(!constant_time_compare("short", "much-longer-key"));
        assert!(constant_time_compare("", ""));
    }
}
