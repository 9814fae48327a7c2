/// Number of description characters kept in a derived report title
pub const TITLE_MAX_CHARS: usize = 50;

/// Marker appended to a title cut from a longer description
pub const TITLE_ELLIPSIS: &str = "...";

/// Location stored on citizen submissions until geolocation exists
pub const DEFAULT_REPORT_LOCATION: &str = "Auto-detected location";

/// Maximum accepted size of an image sent for preview (5MB)
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
