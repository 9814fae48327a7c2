use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating image MIME types accepted for preview
    /// - Valid: "image/png", "image/jpeg", "image/svg+xml", "image/vnd.microsoft.icon"
    /// - Invalid: "text/plain", "image/", "Image/png", "image/png; charset=utf-8"
    pub static ref IMAGE_MIME_REGEX: Regex =
        Regex::new(r"^image/[a-z0-9][a-z0-9.+-]*$").unwrap();
}

/// Returns true when the value is absent or only whitespace
pub fn is_blank(value: Option<&str>) -> bool {
    value.map(str::trim).map_or(true, str::is_empty)
}
