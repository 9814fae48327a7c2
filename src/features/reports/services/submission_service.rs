use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::errors::ValidationError;
use crate::features::reports::models::{CreateReport, Report, ReportCategory, ReportStatus};
use crate::features::reports::repository::ReportRepository;
use crate::shared::constants::{TITLE_ELLIPSIS, TITLE_MAX_CHARS};
use crate::shared::validation::is_blank;

/// Attempts at drawing an id not already present in the store
const MAX_ID_ATTEMPTS: usize = 3;

/// Summary title for a description: the first 50 characters, plus "..." when cut
pub fn derive_title(description: &str) -> String {
    match description.char_indices().nth(TITLE_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &description[..cut], TITLE_ELLIPSIS),
        None => description.to_string(),
    }
}

/// Check the required fields of a citizen submission
pub fn validate_submission(
    description: Option<&str>,
    category: Option<ReportCategory>,
    submitted_by: Option<String>,
) -> std::result::Result<CreateReport, ValidationError> {
    let (description, category) = match (description, category) {
        (Some(description), Some(category)) if !is_blank(Some(description)) => {
            (description, category)
        }
        _ => return Err(ValidationError::MissingFields),
    };

    Ok(CreateReport {
        description: description.to_string(),
        category,
        submitted_by: submitted_by.filter(|name| !name.trim().is_empty()),
    })
}

/// Assemble a new pending report
pub fn build_report(data: CreateReport, id: String, date: NaiveDate, location: &str) -> Report {
    Report {
        id,
        title: derive_title(&data.description),
        description: data.description,
        category: data.category,
        status: ReportStatus::Pending,
        location: location.to_string(),
        date,
        priority: None,
        submitted_by: data.submitted_by,
    }
}

/// Service behind the citizen submission form
pub struct SubmissionService {
    repository: Arc<dyn ReportRepository>,
    default_location: String,
}

impl SubmissionService {
    pub fn new(repository: Arc<dyn ReportRepository>, default_location: String) -> Self {
        Self {
            repository,
            default_location,
        }
    }

    /// Validate, build and prepend a report. Nothing is stored on failure.
    pub async fn submit(
        &self,
        description: Option<&str>,
        category: Option<ReportCategory>,
        submitted_by: Option<String>,
    ) -> Result<Report> {
        let data = validate_submission(description, category, submitted_by).map_err(|e| {
            tracing::debug!("Rejected report submission: {}", e);
            e
        })?;

        let id = self.next_id().await?;
        let report = build_report(data, id, Utc::now().date_naive(), &self.default_location);
        let report = self.repository.prepend(report).await?;

        tracing::info!(
            "Report submitted: id={}, category={}, title={:?}",
            report.id,
            report.category,
            report.title
        );

        Ok(report)
    }

    /// All reports, most recent first
    pub async fn list(&self) -> Result<Vec<Report>> {
        Ok(self.repository.list().await?)
    }

    async fn next_id(&self) -> Result<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = Uuid::now_v7().to_string();
            if !self.repository.contains(&id).await? {
                return Ok(id);
            }
            tracing::warn!("Generated report id {} already in use, retrying", id);
        }

        Err(AppError::Internal(
            "Failed to allocate a unique report id".to_string(),
        ))
    }
}
