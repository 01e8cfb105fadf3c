//! Image URL resolution and local upload previews.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Placeholder shown when a record carries no usable image.
pub const DEFAULT_IMAGE: &str = "assets/images/default-produit.svg";

/// Resolve a stored image reference into a displayable URL.
///
/// Backend-served paths (`/api/images`, `/uploads`) get the API origin
/// prepended. WebDAV share links are rewritten to go through the image
/// proxy, keyed by file name. Anything else (absolute URLs, `data:`
/// previews) passes through untouched.
pub fn resolve_image_url(url: Option<&str>, api_origin: &str) -> String {
    let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
        return DEFAULT_IMAGE.to_string();
    };
    if url.starts_with("/api/images") || url.starts_with("/uploads") {
        return format!("{api_origin}{url}");
    }
    if url.contains("/remote.php/dav/files/") {
        let file_name = url.rsplit('/').next().unwrap_or(url);
        return format!("{api_origin}/api/images/{file_name}");
    }
    url.to_string()
}

/// A file picked for upload but not yet sent. Kept alongside the draft
/// so the upload can follow a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PendingImage {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Inline `data:` URL for previewing the file before upload.
    pub fn preview_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), BASE64.encode(&self.bytes))
    }

    fn mime_type(&self) -> &'static str {
        let ext = self
            .file_name
            .rsplit('.')
            .next()
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "svg" => "image/svg+xml",
            _ => "application/octet-stream",
        }
    }
}
