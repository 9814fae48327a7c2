use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::core::error::{AppError, Result};
use crate::shared::validation::IMAGE_MIME_REGEX;

/// Inline preview of an uploaded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub content_type: String,
    pub size: usize,
    pub data_url: String,
}

/// Encode bytes as a `data:` URL
pub fn to_data_url(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", content_type, BASE64.encode(bytes))
}

/// Turns a citizen's photo into a preview URL. Nothing is kept.
pub struct ImagePreviewService {
    max_bytes: usize,
}

impl ImagePreviewService {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    pub fn preview(&self, content_type: &str, bytes: &[u8]) -> Result<ImagePreview> {
        let content_type = content_type.trim().to_lowercase();

        if !IMAGE_MIME_REGEX.is_match(&content_type) {
            return Err(AppError::BadRequest(format!(
                "File type '{}' is not an image",
                content_type
            )));
        }

        if bytes.is_empty() {
            return Err(AppError::BadRequest("Image is empty".to_string()));
        }

        if bytes.len() > self.max_bytes {
            return Err(AppError::BadRequest(format!(
                "Image too large. Maximum size is {} bytes",
                self.max_bytes
            )));
        }

        tracing::debug!(
            "Building image preview: content_type={}, size={}",
            content_type,
            bytes.len()
        );

        Ok(ImagePreview {
            data_url: to_data_url(&content_type, bytes),
            size: bytes.len(),
            content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_data_url() {
        assert_eq!(to_data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_preview_accepts_image() {
        let service = ImagePreviewService::new(16);

        let preview = service.preview("Image/JPEG", &[0xff, 0xd8, 0xff]).unwrap();

        assert_eq!(preview.content_type, "image/jpeg");
        assert_eq!(preview.size, 3);
        assert_eq!(preview.data_url, "data:image/jpeg;base64,/9j/");
    }

    #[test]
    fn test_preview_rejects_non_image() {
        let service = ImagePreviewService::new(16);
        let result = service.preview("application/pdf", b"%PDF");
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_preview_rejects_empty_and_oversized() {
        let service = ImagePreviewService::new(4);
        assert!(matches!(
            service.preview("image/png", &[]),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.preview("image/png", &[0u8; 5]),
            Err(AppError::BadRequest(_))
        ));
        assert!(service.preview("image/png", &[0u8; 4]).is_ok());
    }
}
