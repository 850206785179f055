//! Notice board posts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeItem {
    pub id: String,
    pub title: String,
    /// Calendar date, serialized as `YYYY-MM-DD`.
    pub published_at: NaiveDate,
    pub markdown: String,
}

/// Request body for creating or updating a notice.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NoticeUpsertRequest {
    #[validate(custom(function = "crate::validation::not_blank", message = "Title is required"))]
    pub title: String,
    pub published_at: NaiveDate,
    #[serde(default)]
    pub markdown: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_at_is_a_plain_date() {
        let req: NoticeUpsertRequest = serde_json::from_value(serde_json::json!({
            "title": "Holiday notice",
            "publishedAt": "2025-01-15"
        }))
        .unwrap();
        assert_eq!(req.published_at, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_datetime_is_not_a_date() {
        let result = serde_json::from_value::<NoticeUpsertRequest>(serde_json::json!({
            "title": "x",
            "publishedAt": "2025-01-15T10:00:00Z"
        }));
        assert!(result.is_err());
    }
}
