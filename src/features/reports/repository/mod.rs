mod memory;
mod seed;

use async_trait::async_trait;

use crate::features::reports::errors::StoreError;
use crate::features::reports::models::{Report, ReportStatus, TransitionPolicy};

pub use memory::InMemoryReportRepository;
pub use seed::sample_reports;

/// Data provider behind both pipelines.
///
/// Reports are kept most-recent-first. Implementations own every report and
/// hand out clones, so callers never hold a reference into the store.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// All reports in display order
    async fn list(&self) -> Result<Vec<Report>, StoreError>;

    async fn find(&self, id: &str) -> Result<Option<Report>, StoreError>;

    async fn contains(&self, id: &str) -> Result<bool, StoreError>;

    /// Insert at the front; fails with `DuplicateId` if the id is taken
    async fn prepend(&self, report: Report) -> Result<Report, StoreError>;

    /// Set the status of one report after `policy` accepts the move
    async fn set_status(
        &self,
        id: &str,
        status: ReportStatus,
        policy: TransitionPolicy,
    ) -> Result<Report, StoreError>;
}
