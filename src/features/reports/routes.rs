use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::reports::handlers::{self, CitizenState};
use crate::features::reports::services::{
    ImagePreviewService, SubmissionService, TriageService,
};

/// Create routes for the citizen portal
pub fn citizen_routes(
    submission_service: Arc<SubmissionService>,
    image_preview_service: Arc<ImagePreviewService>,
) -> Router {
    let state = CitizenState {
        submission_service,
        image_preview_service,
    };

    Router::new()
        .route(
            "/api/citizen/reports",
            get(handlers::list_citizen_reports).post(handlers::submit_report),
        )
        .route("/api/citizen/image-preview", post(handlers::preview_image))
        .with_state(state)
}

/// Create admin dashboard routes (nested under `/api/admin` by the caller)
pub fn admin_routes(triage_service: Arc<TriageService>) -> Router {
    Router::new()
        .route("/reports", get(handlers::list_reports))
        .route("/reports/stats", get(handlers::get_stats))
        .route("/reports/{id}", get(handlers::get_report))
        .route(
            "/reports/{id}/status",
            patch(handlers::update_report_status),
        )
        .with_state(triage_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::features::reports::models::TransitionPolicy;
    use crate::features::reports::repository::{InMemoryReportRepository, ReportRepository};

    fn server_with(policy: TransitionPolicy) -> TestServer {
        let repository: Arc<dyn ReportRepository> = Arc::new(InMemoryReportRepository::seeded());
        let submission_service = Arc::new(SubmissionService::new(
            Arc::clone(&repository),
            "Auto-detected location".to_string(),
        ));
        let triage_service = Arc::new(TriageService::new(Arc::clone(&repository), policy));
        let image_preview_service = Arc::new(ImagePreviewService::new(1024));

        let app = Router::new()
            .merge(citizen_routes(submission_service, image_preview_service))
            .nest("/api/admin", admin_routes(triage_service));

        TestServer::new(app).unwrap()
    }

    fn server() -> TestServer {
        server_with(TransitionPolicy::Unrestricted)
    }

    fn ids(body: &Value) -> Vec<String> {
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_submit_then_listed_first() {
        let server = server();

        let response = server
            .post("/api/citizen/reports")
            .json(&json!({
                "description": "Overflowing bins behind the market",
                "category": "waste"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "pending");
        assert_eq!(body["data"]["title"], "Overflowing bins behind the market");
        assert_eq!(body["data"]["location"], "Auto-detected location");
        let new_id = body["data"]["id"].as_str().unwrap().to_string();

        let list: Value = server.get("/api/citizen/reports").await.json();
        assert_eq!(list["meta"]["total"], 5);
        assert_eq!(ids(&list)[0], new_id);

        let stats: Value = server.get("/api/admin/reports/stats").await.json();
        assert_eq!(stats["data"]["total"], 5);
        assert_eq!(stats["data"]["pending"], 3);
    }

    #[tokio::test]
    async fn test_submit_missing_fields() {
        let server = server();

        let response = server
            .post("/api/citizen/reports")
            .json(&json!({ "description": "", "category": "roads" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "Description and category are required to submit a report."
        );

        server
            .post("/api/citizen/reports")
            .json(&json!({ "description": "Pothole" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let list: Value = server.get("/api/citizen/reports").await.json();
        assert_eq!(list["meta"]["total"], 4);
    }

    #[tokio::test]
    async fn test_submit_missing_description_wins_over_bad_category() {
        let server = server();

        for body in [
            json!({ "description": "", "category": "parks" }),
            json!({ "description": null, "category": "roads" }),
            json!({ "description": null, "category": "parks" }),
        ] {
            let response = server.post("/api/citizen/reports").json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            let body: Value = response.json();
            assert_eq!(
                body["message"],
                "Description and category are required to submit a report."
            );
        }

        let list: Value = server.get("/api/citizen/reports").await.json();
        assert_eq!(list["meta"]["total"], 4);
    }

    #[tokio::test]
    async fn test_submit_unknown_category() {
        let server = server();

        server
            .post("/api/citizen/reports")
            .json(&json!({ "description": "Tree down", "category": "parks" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_submit_malformed_json() {
        let server = server();

        server
            .post("/api/citizen/reports")
            .text("{not json")
            .content_type("application/json")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_citizen_list_hides_admin_fields() {
        let server = server();

        let list: Value = server.get("/api/citizen/reports").await.json();

        assert_eq!(ids(&list), vec!["1", "2", "3", "4"]);
        assert!(list["data"][0].get("submittedBy").is_none());
    }

    #[tokio::test]
    async fn test_admin_filter_by_status_and_category() {
        let server = server();

        let pending: Value = server
            .get("/api/admin/reports")
            .add_query_param("status", "pending")
            .await
            .json();
        assert_eq!(ids(&pending), vec!["2", "4"]);
        assert_eq!(pending["meta"]["total"], 2);

        let pending_waste: Value = server
            .get("/api/admin/reports")
            .add_query_param("status", "pending")
            .add_query_param("category", "waste")
            .await
            .json();
        assert!(ids(&pending_waste).is_empty());

        let all: Value = server
            .get("/api/admin/reports")
            .add_query_param("status", "all")
            .add_query_param("category", "infrastructure")
            .await
            .json();
        assert_eq!(ids(&all), vec!["2", "4"]);
        assert_eq!(all["data"][0]["submittedBy"], "Jane Smith");
    }

    #[tokio::test]
    async fn test_admin_filter_rejects_unknown_status() {
        let server = server();

        server
            .get("/api/admin/reports")
            .add_query_param("status", "closed")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_admin_stats_over_seed() {
        let server = server();

        let response = server.get("/api/admin/reports/stats").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "success": true,
            "data": { "total": 4, "pending": 2, "inProgress": 1, "resolved": 1 },
            "message": null,
            "meta": null,
            "errors": null
        }));
    }

    #[tokio::test]
    async fn test_admin_get_report() {
        let server = server();

        let found: Value = server.get("/api/admin/reports/3").await.json();
        assert_eq!(found["data"]["title"], "Illegal waste dumping");

        server
            .get("/api/admin/reports/999")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_admin_update_status() {
        let server = server();

        let response = server
            .patch("/api/admin/reports/2/status")
            .json(&json!({ "status": "in-progress" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["status"], "in-progress");

        let stats: Value = server.get("/api/admin/reports/stats").await.json();
        assert_eq!(stats["data"]["pending"], 1);
        assert_eq!(stats["data"]["inProgress"], 2);
    }

    #[tokio::test]
    async fn test_admin_update_status_errors() {
        let server = server_with(TransitionPolicy::Forward);

        server
            .patch("/api/admin/reports/999/status")
            .json(&json!({ "status": "resolved" }))
            .await
            .assert_status(StatusCode::NOT_FOUND);

        server
            .patch("/api/admin/reports/3/status")
            .json(&json!({ "status": "pending" }))
            .await
            .assert_status(StatusCode::CONFLICT);

        server
            .patch("/api/admin/reports/2/status")
            .json(&json!({ "status": "archived" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_image_preview() {
        let server = server();

        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(b"abc".to_vec())
                .file_name("photo.png")
                .mime_type("image/png"),
        );
        let response = server.post("/api/citizen/image-preview").multipart(form).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["dataUrl"], "data:image/png;base64,YWJj");
        assert_eq!(body["data"]["size"], 3);
    }

    #[tokio::test]
    async fn test_image_preview_rejects_non_image() {
        let server = server();

        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(b"hello".to_vec())
                .file_name("notes.txt")
                .mime_type("text/plain"),
        );

        server
            .post("/api/citizen/image-preview")
            .multipart(form)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_image_preview_requires_file() {
        let server = server();

        let form = MultipartForm::new().add_text("caption", "no file here");

        server
            .post("/api/citizen/image-preview")
            .multipart(form)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
