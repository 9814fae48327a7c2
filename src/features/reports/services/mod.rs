mod image_preview_service;
mod submission_service;
mod triage_service;

pub use image_preview_service::{ImagePreview, ImagePreviewService};
pub use submission_service::SubmissionService;
pub use triage_service::TriageService;
