use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        // Citizen portal
        reports_handlers::citizen_handler::submit_report,
        reports_handlers::citizen_handler::list_citizen_reports,
        reports_handlers::citizen_handler::preview_image,
        // Admin dashboard
        reports_handlers::admin_handler::list_reports,
        reports_handlers::admin_handler::get_stats,
        reports_handlers::admin_handler::get_report,
        reports_handlers::admin_handler::update_report_status,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Categories
            categories_dtos::CategoryResponseDto,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            // Reports
            reports_models::ReportStatus,
            reports_models::ReportCategory,
            reports_models::ReportPriority,
            reports_dtos::SubmitReportDto,
            reports_dtos::UpdateReportStatusDto,
            reports_dtos::UploadImageDto,
            reports_dtos::StatusBadgeDto,
            reports_dtos::CitizenReportDto,
            reports_dtos::AdminReportDto,
            reports_dtos::ReportStatsDto,
            reports_dtos::ImagePreviewDto,
            ApiResponse<reports_dtos::CitizenReportDto>,
            ApiResponse<Vec<reports_dtos::CitizenReportDto>>,
            ApiResponse<reports_dtos::AdminReportDto>,
            ApiResponse<Vec<reports_dtos::AdminReportDto>>,
            ApiResponse<reports_dtos::ReportStatsDto>,
            ApiResponse<reports_dtos::ImagePreviewDto>,
        )
    ),
    tags(
        (name = "categories", description = "Report categories"),
        (name = "citizen", description = "Citizen portal: submit and track reports"),
        (name = "admin", description = "Admin dashboard: filter, count and triage reports"),
    ),
    info(
        title = "Civic Report API",
        version = "0.1.0",
        description = "API documentation for Civic Report",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_report_paths() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/citizen/reports",
            "/api/citizen/image-preview",
            "/api/admin/reports",
            "/api/admin/reports/stats",
            "/api/admin/reports/{id}",
            "/api/admin/reports/{id}/status",
            "/api/categories",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Town Reports".to_string(),
            version: "9.9.9".to_string(),
            description: "Local".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Town Reports");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Local"));
    }
}
