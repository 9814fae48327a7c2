use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{
    CitizenReportDto, ImagePreviewDto, SubmitReportDto, UploadImageDto,
};
use crate::features::reports::services::{ImagePreviewService, SubmissionService};
use crate::shared::types::{ApiResponse, Meta};

/// State for citizen portal handlers
#[derive(Clone)]
pub struct CitizenState {
    pub submission_service: Arc<SubmissionService>,
    pub image_preview_service: Arc<ImagePreviewService>,
}

/// Submit a new civic issue report
///
/// The report starts as `pending` and is placed at the front of the list.
#[utoipa::path(
    post,
    path = "/api/citizen/reports",
    request_body = SubmitReportDto,
    responses(
        (status = 201, description = "Report submitted", body = ApiResponse<CitizenReportDto>),
        (status = 400, description = "Description or category missing, or unknown category")
    ),
    tag = "citizen"
)]
pub async fn submit_report(
    State(state): State<CitizenState>,
    AppJson(dto): AppJson<SubmitReportDto>,
) -> Result<(StatusCode, Json<ApiResponse<CitizenReportDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = dto.parsed_category()?;
    let report = state
        .submission_service
        .submit(dto.description.as_deref(), category, dto.submitted_by)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(report.into()),
            Some(
                "Report submitted successfully! Thank you for helping improve our community. \
                 We'll review your report shortly."
                    .to_string(),
            ),
            None,
        )),
    ))
}

/// List recent reports, most recent first
#[utoipa::path(
    get,
    path = "/api/citizen/reports",
    responses(
        (status = 200, description = "Recent reports", body = ApiResponse<Vec<CitizenReportDto>>)
    ),
    tag = "citizen"
)]
pub async fn list_citizen_reports(
    State(state): State<CitizenState>,
) -> Result<Json<ApiResponse<Vec<CitizenReportDto>>>> {
    let reports = state.submission_service.list().await?;
    let total = reports.len() as i64;
    let dtos: Vec<CitizenReportDto> = reports.into_iter().map(|r| r.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Preview an image before submitting
///
/// Accepts multipart/form-data with a single `file` field. The image is
/// returned as a data URL and is not stored.
#[utoipa::path(
    post,
    path = "/api/citizen/image-preview",
    request_body(
        content = UploadImageDto,
        content_type = "multipart/form-data",
        description = "Image file to preview",
    ),
    responses(
        (status = 200, description = "Image preview", body = ApiResponse<ImagePreviewDto>),
        (status = 400, description = "Missing, empty, oversized or non-image file")
    ),
    tag = "citizen"
)]
pub async fn preview_image(
    State(state): State<CitizenState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<ImagePreviewDto>>> {
    let mut image: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        if field_name != "file" {
            debug!("Ignoring unknown field: {}", field_name);
            continue;
        }

        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let data = field.bytes().await.map_err(|e| {
            debug!("Failed to read file bytes: {}", e);
            AppError::BadRequest(format!("Failed to read file data: {}", e))
        })?;

        image = Some((content_type, data.to_vec()));
    }

    let (content_type, data) =
        image.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;

    let preview = state.image_preview_service.preview(&content_type, &data)?;
    Ok(Json(ApiResponse::success(Some(preview.into()), None, None)))
}
