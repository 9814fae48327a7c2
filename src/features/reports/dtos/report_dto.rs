use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{
    Report, ReportCategory, ReportFilter, ReportPriority, ReportStats, ReportStatus, Selection,
};
use crate::features::reports::presentation::{
    category_label, priority_color, status_label, status_style,
};
use crate::features::reports::services::ImagePreview;
use crate::shared::validation::is_blank;

// =============================================================================
// REQUEST DTOs
// =============================================================================

/// Request DTO for submitting a report from the citizen portal
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportDto {
    /// What is wrong (required)
    #[serde(default)]
    #[schema(example = "Large pothole causing damage to vehicles")]
    pub description: Option<String>,

    /// One of: roads, waste, infrastructure, environment, safety, other (required)
    #[serde(default)]
    #[schema(example = "roads")]
    pub category: Option<String>,

    /// Optional display name of the submitter
    #[validate(length(max = 255, message = "Submitter name must not exceed 255 characters"))]
    pub submitted_by: Option<String>,
}

impl SubmitReportDto {
    /// Blank category is treated as missing; anything else must be a known category.
    /// A blank description skips the lookup so the missing-field error wins.
    pub fn parsed_category(&self) -> Result<Option<ReportCategory>> {
        if is_blank(self.description.as_deref()) || is_blank(self.category.as_deref()) {
            return Ok(None);
        }

        self.category
            .as_deref()
            .map(|raw| raw.trim().parse::<ReportCategory>())
            .transpose()
            .map_err(AppError::BadRequest)
    }
}

/// Query params for the admin report list
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ReportFilterParams {
    /// Status to keep, or "all" (default)
    #[param(example = "pending")]
    pub status: Option<String>,
    /// Category to keep, or "all" (default)
    #[param(example = "all")]
    pub category: Option<String>,
}

impl ReportFilterParams {
    pub fn to_filter(&self) -> Result<ReportFilter> {
        let status = Selection::<ReportStatus>::parse(self.status.as_deref())
            .map_err(AppError::BadRequest)?;
        let category = Selection::<ReportCategory>::parse(self.category.as_deref())
            .map_err(AppError::BadRequest)?;
        Ok(ReportFilter::new(status, category))
    }
}

/// Request DTO for updating report status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReportStatusDto {
    pub status: ReportStatus,
}

/// Upload image request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadImageDto {
    /// The image to preview
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

// =============================================================================
// RESPONSE DTOs
// =============================================================================

/// Display hints for a status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusBadgeDto {
    pub label: String,
    pub icon: String,
    pub color: String,
}

impl From<ReportStatus> for StatusBadgeDto {
    fn from(status: ReportStatus) -> Self {
        let style = status_style(status);
        Self {
            label: status_label(status),
            icon: style.icon.to_string(),
            color: style.color.to_string(),
        }
    }
}

/// Citizen view of a report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CitizenReportDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ReportCategory,
    pub category_label: String,
    pub status: ReportStatus,
    pub status_badge: StatusBadgeDto,
    pub location: String,
    pub date: NaiveDate,
}

impl From<Report> for CitizenReportDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            category: r.category,
            category_label: category_label(r.category).to_string(),
            status: r.status,
            status_badge: r.status.into(),
            location: r.location,
            date: r.date,
        }
    }
}

/// Admin view of a report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminReportDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ReportCategory,
    pub category_label: String,
    pub status: ReportStatus,
    pub status_badge: StatusBadgeDto,
    pub location: String,
    pub date: NaiveDate,
    pub priority: Option<ReportPriority>,
    pub priority_color: Option<String>,
    pub submitted_by: Option<String>,
}

impl From<Report> for AdminReportDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            category: r.category,
            category_label: category_label(r.category).to_string(),
            status: r.status,
            status_badge: r.status.into(),
            location: r.location,
            date: r.date,
            priority: r.priority,
            priority_color: r.priority.map(|p| priority_color(p).to_string()),
            submitted_by: r.submitted_by,
        }
    }
}

/// Counts over every report in the store
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatsDto {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl From<ReportStats> for ReportStatsDto {
    fn from(s: ReportStats) -> Self {
        Self {
            total: s.total,
            pending: s.pending,
            in_progress: s.in_progress,
            resolved: s.resolved,
        }
    }
}

/// Response DTO for an image preview
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImagePreviewDto {
    pub content_type: String,
    pub size: usize,
    /// `data:<content-type>;base64,...`
    pub data_url: String,
}

impl From<ImagePreview> for ImagePreviewDto {
    fn from(p: ImagePreview) -> Self {
        Self {
            content_type: p.content_type,
            size: p.size,
            data_url: p.data_url,
        }
    }
}
