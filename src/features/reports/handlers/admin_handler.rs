use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::reports::dtos::{
    AdminReportDto, ReportFilterParams, ReportStatsDto, UpdateReportStatusDto,
};
use crate::features::reports::services::TriageService;
use crate::shared::types::{ApiResponse, Meta};

/// List reports filtered by status and category
#[utoipa::path(
    get,
    path = "/api/admin/reports",
    params(ReportFilterParams),
    responses(
        (status = 200, description = "Matching reports, in store order", body = ApiResponse<Vec<AdminReportDto>>),
        (status = 400, description = "Unknown status or category")
    ),
    tag = "admin"
)]
pub async fn list_reports(
    State(service): State<Arc<TriageService>>,
    Query(params): Query<ReportFilterParams>,
) -> Result<Json<ApiResponse<Vec<AdminReportDto>>>> {
    let filter = params.to_filter()?;
    let reports = service.list(&filter).await?;
    let total = reports.len() as i64;
    let dtos: Vec<AdminReportDto> = reports.into_iter().map(|r| r.into()).collect();

    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Report counts per status over all reports
#[utoipa::path(
    get,
    path = "/api/admin/reports/stats",
    responses(
        (status = 200, description = "Report statistics", body = ApiResponse<ReportStatsDto>)
    ),
    tag = "admin"
)]
pub async fn get_stats(
    State(service): State<Arc<TriageService>>,
) -> Result<Json<ApiResponse<ReportStatsDto>>> {
    let stats = service.stats().await?;
    Ok(Json(ApiResponse::success(Some(stats.into()), None, None)))
}

/// Get report by ID
#[utoipa::path(
    get,
    path = "/api/admin/reports/{id}",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    responses(
        (status = 200, description = "Report found", body = ApiResponse<AdminReportDto>),
        (status = 404, description = "Report not found")
    ),
    tag = "admin"
)]
pub async fn get_report(
    State(service): State<Arc<TriageService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<AdminReportDto>>> {
    let report = service.get(&id).await?;
    Ok(Json(ApiResponse::success(Some(report.into()), None, None)))
}

/// Update report status
#[utoipa::path(
    patch,
    path = "/api/admin/reports/{id}/status",
    params(
        ("id" = String, Path, description = "Report ID")
    ),
    request_body = UpdateReportStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<AdminReportDto>),
        (status = 404, description = "Report not found"),
        (status = 409, description = "Transition not allowed")
    ),
    tag = "admin"
)]
pub async fn update_report_status(
    State(service): State<Arc<TriageService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateReportStatusDto>,
) -> Result<Json<ApiResponse<AdminReportDto>>> {
    let report = service.update_status(&id, dto.status).await?;
    Ok(Json(ApiResponse::success(
        Some(report.into()),
        Some(format!("Report {} is now {}", id, dto.status)),
        None,
    )))
}
