//! Inquiry model: public quote / test-demo requests and their review state.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;

/// Which inquiry form the request came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryType {
    #[default]
    Quote,
    TestDemo,
}

impl InquiryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryType::Quote => "quote",
            InquiryType::TestDemo => "test-demo",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "quote" => Some(InquiryType::Quote),
            "test-demo" => Some(InquiryType::TestDemo),
            _ => None,
        }
    }
}

/// Review status. `InReview` is the only initial state and `Done` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum InquiryStatus {
    InReview,
    Done,
}

/// Field values written by a status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub status: InquiryStatus,
    pub is_read: bool,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::InReview => "in-review",
            InquiryStatus::Done => "done",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "in-review" => Some(InquiryStatus::InReview),
            "done" => Some(InquiryStatus::Done),
            _ => None,
        }
    }

    /// Move from `self` to `requested`.
    ///
    /// Business rule: changing the status always marks the inquiry as read,
    /// so the returned change carries `is_read = true` regardless of the
    /// previous read state. `Done` never moves back to `InReview`.
    pub fn transition_to(self, requested: InquiryStatus) -> Result<StatusChange, AppError> {
        if self == InquiryStatus::Done && requested == InquiryStatus::InReview {
            return Err(AppError::validation(
                "A completed inquiry cannot return to review",
            ));
        }
        Ok(StatusChange {
            status: requested,
            is_read: true,
        })
    }
}

/// A stored inquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryItem {
    pub id: String,
    pub inquiry_type: InquiryType,
    pub company: String,
    pub position: String,
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub requirements: String,
    pub consent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_mime_type: Option<String>,
    pub status: InquiryStatus,
    pub is_read: bool,
    pub created_at: String,
}

/// Request body for a public inquiry submission.
///
/// Server-owned fields (`id`, `status`, `isRead`, `createdAt`) are not part of
/// the request and are dropped if a client sends them.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InquiryCreateRequest {
    #[serde(default)]
    pub inquiry_type: InquiryType,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validation::not_blank", message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(
        email(message = "A valid email address is required"),
        custom(function = "crate::validation::dotted_email_domain", message = "A valid email address is required")
    )]
    pub email: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub consent: bool,
    #[serde(default)]
    pub attachment_url: Option<String>,
    #[serde(default)]
    pub attachment_name: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "Attachment size must not be negative"))]
    pub attachment_size: Option<i64>,
    #[serde(default)]
    pub attachment_mime_type: Option<String>,
}

impl InquiryCreateRequest {
    /// Field rules plus the consent requirement.
    pub fn check(&self) -> Result<(), AppError> {
        if !self.consent {
            return Err(AppError::validation(
                "Consent to the privacy policy is required",
            ));
        }
        self.validate()?;
        Ok(())
    }
}

/// Request body for an admin status change.
#[derive(Debug, Clone, Deserialize)]
pub struct InquiryStatusRequest {
    pub status: InquiryStatus,
}

/// Unread badge payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCount {
    pub unread_count: i64,
}

/// Result of a bulk "mark all read".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadResult {
    pub updated_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> InquiryCreateRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_consent_is_required() {
        let req = request(serde_json::json!({
            "name": "X",
            "email": "x@y.com",
            "consent": false
        }));
        assert!(matches!(req.check(), Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_minimal_request_passes() {
        let req = request(serde_json::json!({
            "name": "X",
            "email": "x@y.com",
            "consent": true
        }));
        assert!(req.check().is_ok());
        assert_eq!(req.inquiry_type, InquiryType::Quote);
        assert_eq!(req.company, "");
    }

    #[test]
    fn test_bad_email_and_blank_name_fail() {
        let req = request(serde_json::json!({
            "name": "   ",
            "email": "not-an-email",
            "consent": true
        }));
        match req.check() {
            Err(AppError::Validation { violations, .. }) => {
                let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
                assert_eq!(paths, vec!["email", "name"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_email_without_top_level_domain_fails() {
        let req = request(serde_json::json!({
            "name": "X",
            "email": "x@y",
            "consent": true
        }));
        match req.check() {
            Err(AppError::Validation { violations, .. }) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].path, "email");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_server_fields_are_ignored() {
        let req = request(serde_json::json!({
            "id": "client-id",
            "status": "done",
            "isRead": true,
            "createdAt": "2001-01-01T00:00:00Z",
            "inquiryType": "test-demo",
            "name": "X",
            "email": "x@y.com",
            "consent": true
        }));
        assert_eq!(req.inquiry_type, InquiryType::TestDemo);
        assert!(req.check().is_ok());
    }

    #[test]
    fn test_status_change_marks_read() {
        let change = InquiryStatus::InReview
            .transition_to(InquiryStatus::Done)
            .unwrap();
        assert_eq!(change.status, InquiryStatus::Done);
        assert!(change.is_read);

        let same = InquiryStatus::InReview
            .transition_to(InquiryStatus::InReview)
            .unwrap();
        assert!(same.is_read);
    }

    #[test]
    fn test_done_is_terminal() {
        assert!(InquiryStatus::Done
            .transition_to(InquiryStatus::InReview)
            .is_err());
        assert!(InquiryStatus::Done.transition_to(InquiryStatus::Done).is_ok());
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(InquiryStatus::InReview).unwrap(),
            "in-review"
        );
        assert_eq!(InquiryStatus::parse("done"), Some(InquiryStatus::Done));
        assert_eq!(InquiryType::parse("test-demo"), Some(InquiryType::TestDemo));
        assert!(InquiryType::parse("sales").is_none());
    }
}
