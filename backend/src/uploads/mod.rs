//! Blob storage for uploaded attachments and resource files.

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::config::Config;
use crate::errors::AppError;

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

const INQUIRY_EXTENSIONS: &[&str] = &[
    ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".png", ".jpg", ".jpeg", ".gif",
    ".webp", ".zip",
];
const RESOURCE_ONLY_EXTENSIONS: &[&str] = &[".hwp", ".txt", ".md"];

/// Which upload bucket a file goes into. Each bucket has its own
/// extension allow-list and size limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Inquiry,
    Resource,
}

impl UploadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadKind::Inquiry => "inquiry",
            UploadKind::Resource => "resource",
        }
    }

    /// Name used when the client sends no `x-file-name` header.
    pub fn fallback_file_name(&self) -> &'static str {
        match self {
            UploadKind::Inquiry => "inquiry_file",
            UploadKind::Resource => "resource_file",
        }
    }

    pub fn allows_extension(&self, ext: &str) -> bool {
        match self {
            UploadKind::Inquiry => INQUIRY_EXTENSIONS.contains(&ext),
            UploadKind::Resource => {
                INQUIRY_EXTENSIONS.contains(&ext) || RESOURCE_ONLY_EXTENSIONS.contains(&ext)
            }
        }
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata of a stored file, returned to the uploader.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    pub url: String,
    pub original_name: String,
    pub size: u64,
    pub mime_type: String,
}

/// Storage backend for uploaded bytes.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upper size bound for `kind`, in bytes.
    fn max_bytes(&self, kind: UploadKind) -> usize;

    async fn store(
        &self,
        kind: UploadKind,
        bytes: &[u8],
        original_name: &str,
        mime_type: &str,
    ) -> Result<StoredFile, AppError>;
}

/// Writes files to `<root>/<kind>/<uuid><ext>` on the local disk.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
    max_inquiry_bytes: usize,
    max_resource_bytes: usize,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>, max_inquiry_bytes: usize, max_resource_bytes: usize) -> Self {
        Self {
            root: root.into(),
            max_inquiry_bytes,
            max_resource_bytes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.upload_dir.clone(),
            config.max_inquiry_file_bytes,
            config.max_resource_file_bytes,
        )
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    fn max_bytes(&self, kind: UploadKind) -> usize {
        match kind {
            UploadKind::Inquiry => self.max_inquiry_bytes,
            UploadKind::Resource => self.max_resource_bytes,
        }
    }

    async fn store(
        &self,
        kind: UploadKind,
        bytes: &[u8],
        original_name: &str,
        mime_type: &str,
    ) -> Result<StoredFile, AppError> {
        let safe_name = sanitize_file_name(original_name);
        let ext = match file_extension(&safe_name) {
            Some(ext) if kind.allows_extension(&ext) => ext,
            other => {
                return Err(AppError::Upload(format!(
                    "Unsupported file extension: {}",
                    other.as_deref().unwrap_or("(none)")
                )));
            }
        };
        if bytes.is_empty() {
            return Err(AppError::Upload("File is empty".to_string()));
        }
        let max_bytes = self.max_bytes(kind);
        if bytes.len() > max_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "File is too large. Max allowed bytes: {}",
                max_bytes
            )));
        }

        let dir = self.root.join(kind.as_str());
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            tracing::error!("Failed to create upload directory {:?}: {}", dir, e);
            AppError::Internal("Failed to store file".to_string())
        })?;

        let stored_name = format!("{}{}", uuid::Uuid::new_v4(), ext);
        let full_path = dir.join(&stored_name);
        tokio::fs::write(&full_path, bytes).await.map_err(|e| {
            tracing::error!("Failed to write upload {:?}: {}", full_path, e);
            AppError::Internal("Failed to store file".to_string())
        })?;

        tracing::info!(kind = %kind, size = bytes.len(), "Stored upload {}", stored_name);

        Ok(StoredFile {
            url: format!("/api/files/{}/{}", kind, stored_name),
            original_name: safe_name,
            size: bytes.len() as u64,
            mime_type: if mime_type.trim().is_empty() {
                DEFAULT_MIME_TYPE.to_string()
            } else {
                mime_type.to_string()
            },
        })
    }
}

/// Reduce a client-supplied name to its base name over `[A-Za-z0-9._-]`.
///
/// Other characters become `_`, and runs of `_` collapse to one.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or("");
    let base = if base.is_empty() { "file" } else { base };

    let mut out = String::with_capacity(base.len());
    for c in base.chars() {
        let c = if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
            c
        } else {
            '_'
        };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Lower-cased extension including the dot. A leading dot alone does not
/// count (`.env` has no extension).
fn file_extension(name: &str) -> Option<String> {
    let index = name.rfind('.')?;
    if index == 0 || index == name.len() - 1 {
        return None;
    }
    Some(name[index..].to_ascii_lowercase())
}

/// Decode `%XX` escapes in a header value. Malformed escapes are kept as-is.
pub fn decode_header_file_name(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> LocalBlobStore {
        LocalBlobStore::new(dir.path(), 16, 32)
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("제품 카탈로그 (v2).pdf"), "_v2_.pdf");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("a  b.PDF"), "a_b.PDF");
        assert_eq!(sanitize_file_name(""), "file");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("a.PDF").as_deref(), Some(".pdf"));
        assert_eq!(file_extension(".env"), None);
        assert_eq!(file_extension("noext"), None);
        assert_eq!(file_extension("trailing."), None);
    }

    #[test]
    fn test_decode_header_file_name() {
        assert_eq!(decode_header_file_name("spec%20sheet.pdf"), "spec sheet.pdf");
        assert_eq!(decode_header_file_name("%ED%95%9C.pdf"), "한.pdf");
        assert_eq!(decode_header_file_name("100%.pdf"), "100%.pdf");
        assert_eq!(decode_header_file_name("bad%zz"), "bad%zz");
        assert_eq!(decode_header_file_name("tail%2"), "tail%2");
        assert_eq!(decode_header_file_name("%FF.pdf"), "\u{FFFD}.pdf");
    }

    #[test]
    fn test_resource_allows_more_extensions() {
        assert!(!UploadKind::Inquiry.allows_extension(".hwp"));
        assert!(UploadKind::Resource.allows_extension(".hwp"));
        assert!(UploadKind::Resource.allows_extension(".pdf"));
    }

    #[tokio::test]
    async fn test_store_writes_file() {
        let dir = TempDir::new().unwrap();
        let blobs = store(&dir);

        let stored = blobs
            .store(UploadKind::Inquiry, b"%PDF-1.4", "drawing.PDF", "")
            .await
            .unwrap();

        assert!(stored.url.starts_with("/api/files/inquiry/"));
        assert!(stored.url.ends_with(".pdf"));
        assert_eq!(stored.original_name, "drawing.PDF");
        assert_eq!(stored.size, 8);
        assert_eq!(stored.mime_type, DEFAULT_MIME_TYPE);

        let name = stored.url.rsplit('/').next().unwrap();
        let on_disk = std::fs::read(dir.path().join("inquiry").join(name)).unwrap();
        assert_eq!(on_disk, b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_store_rejects_bad_input() {
        let dir = TempDir::new().unwrap();
        let blobs = store(&dir);

        let exe = blobs.store(UploadKind::Inquiry, b"MZ", "setup.exe", "").await;
        assert!(matches!(exe, Err(AppError::Upload(_))));

        let empty = blobs.store(UploadKind::Inquiry, b"", "a.pdf", "").await;
        assert!(matches!(empty, Err(AppError::Upload(_))));

        let big = blobs.store(UploadKind::Inquiry, &[1u8; 17], "a.pdf", "").await;
        assert!(matches!(big, Err(AppError::PayloadTooLarge(_))));

        let ok = blobs.store(UploadKind::Resource, &[1u8; 17], "a.hwp", "x/y").await;
        assert_eq!(ok.unwrap().mime_type, "x/y");
    }
}
