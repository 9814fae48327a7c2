use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::features::reports::errors::StoreError;
use crate::features::reports::models::{Report, ReportStatus, TransitionPolicy};
use crate::features::reports::repository::{sample_reports, ReportRepository};

/// Process-lifetime report store backed by a vector
pub struct InMemoryReportRepository {
    reports: RwLock<Vec<Report>>,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self::with_reports(Vec::new())
    }

    /// Store pre-filled with the given reports, already in display order
    pub fn with_reports(reports: Vec<Report>) -> Self {
        Self {
            reports: RwLock::new(reports),
        }
    }

    pub fn seeded() -> Self {
        Self::with_reports(sample_reports())
    }
}

impl Default for InMemoryReportRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn list(&self) -> Result<Vec<Report>, StoreError> {
        Ok(self.reports.read().await.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<Report>, StoreError> {
        Ok(self.reports.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn contains(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.reports.read().await.iter().any(|r| r.id == id))
    }

    async fn prepend(&self, report: Report) -> Result<Report, StoreError> {
        let mut reports = self.reports.write().await;
        if reports.iter().any(|r| r.id == report.id) {
            return Err(StoreError::DuplicateId(report.id));
        }
        reports.insert(0, report.clone());
        Ok(report)
    }

    async fn set_status(
        &self,
        id: &str,
        status: ReportStatus,
        policy: TransitionPolicy,
    ) -> Result<Report, StoreError> {
        let mut reports = self.reports.write().await;
        let report = reports
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        policy.check(report.status, status)?;
        report.status = status;
        Ok(report.clone())
    }
}
