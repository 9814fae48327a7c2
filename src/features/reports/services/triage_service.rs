use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{
    Report, ReportFilter, ReportStats, ReportStatus, TransitionPolicy,
};
use crate::features::reports::repository::ReportRepository;

/// Reports matching both selections, in their original order
pub fn filter_reports(reports: Vec<Report>, filter: &ReportFilter) -> Vec<Report> {
    reports.into_iter().filter(|r| filter.matches(r)).collect()
}

/// Count reports per status
pub fn aggregate(reports: &[Report]) -> ReportStats {
    reports.iter().fold(
        ReportStats {
            total: reports.len(),
            ..ReportStats::default()
        },
        |mut stats, report| {
            match report.status {
                ReportStatus::Pending => stats.pending += 1,
                ReportStatus::InProgress => stats.in_progress += 1,
                ReportStatus::Resolved => stats.resolved += 1,
            }
            stats
        },
    )
}

/// Service behind the admin dashboard
pub struct TriageService {
    repository: Arc<dyn ReportRepository>,
    policy: TransitionPolicy,
}

impl TriageService {
    pub fn new(repository: Arc<dyn ReportRepository>, policy: TransitionPolicy) -> Self {
        Self { repository, policy }
    }

    pub async fn list(&self, filter: &ReportFilter) -> Result<Vec<Report>> {
        let reports = self.repository.list().await?;
        Ok(filter_reports(reports, filter))
    }

    /// Counts over the whole store, ignoring any filter
    pub async fn stats(&self) -> Result<ReportStats> {
        let reports = self.repository.list().await?;
        Ok(aggregate(&reports))
    }

    pub async fn get(&self, id: &str) -> Result<Report> {
        self.repository
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    pub async fn update_status(&self, id: &str, status: ReportStatus) -> Result<Report> {
        tracing::info!("Updating report {} to status: {}", id, status);

        let report = self
            .repository
            .set_status(id, status, self.policy)
            .await
            .map_err(|e| {
                tracing::warn!("Status update for report {} rejected: {}", id, e);
                e
            })?;

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::{ReportCategory, Selection};
    use crate::features::reports::repository::InMemoryReportRepository;
    use crate::shared::test_helpers::report_with;

    fn two_report_store() -> Vec<Report> {
        vec![
            report_with("a", ReportStatus::Pending, ReportCategory::Roads),
            report_with("b", ReportStatus::Resolved, ReportCategory::Waste),
        ]
    }

    fn mixed_store() -> Vec<Report> {
        let mut reports = Vec::new();
        let mut n = 0;
        for status in ReportStatus::ALL {
            for category in ReportCategory::ALL {
                reports.push(report_with(&n.to_string(), status, category));
                n += 1;
            }
        }
        reports.push(report_with("extra", ReportStatus::Pending, ReportCategory::Roads));
        reports
    }

    #[test]
    fn test_filter_pending_scenario() {
        let store = two_report_store();
        let filter = ReportFilter::new(Selection::Only(ReportStatus::Pending), Selection::All);

        let filtered = filter_reports(store.clone(), &filter);

        assert_eq!(filtered, vec![store[0].clone()]);
    }

    #[test]
    fn test_aggregate_scenario() {
        let stats = aggregate(&two_report_store());
        assert_eq!(
            stats,
            ReportStats {
                total: 2,
                pending: 1,
                in_progress: 0,
                resolved: 1,
            }
        );
    }

    #[test]
    fn test_filter_all_all_returns_everything() {
        let store = mixed_store();
        assert_eq!(filter_reports(store.clone(), &ReportFilter::default()), store);
    }

    #[test]
    fn test_filter_output_is_ordered_matching_subsequence() {
        let store = mixed_store();

        let mut statuses: Vec<Selection<ReportStatus>> =
            ReportStatus::ALL.into_iter().map(Selection::Only).collect();
        statuses.push(Selection::All);
        let mut categories: Vec<Selection<ReportCategory>> =
            ReportCategory::ALL.into_iter().map(Selection::Only).collect();
        categories.push(Selection::All);

        for status in &statuses {
            for category in &categories {
                let filter = ReportFilter::new(*status, *category);
                let filtered = filter_reports(store.clone(), &filter);

                assert!(filtered
                    .iter()
                    .all(|r| status.matches(&r.status) && category.matches(&r.category)));

                let expected: Vec<Report> =
                    store.iter().filter(|r| filter.matches(r)).cloned().collect();
                assert_eq!(filtered, expected);
            }
        }
    }

    #[test]
    fn test_aggregate_buckets_sum_to_total() {
        let stats = aggregate(&mixed_store());
        assert_eq!(stats.total, 19);
        assert_eq!(stats.pending, 7);
        assert_eq!(stats.pending + stats.in_progress + stats.resolved, stats.total);
        assert_eq!(aggregate(&[]), ReportStats::default());
    }

    #[tokio::test]
    async fn test_stats_ignore_filter() {
        let service = TriageService::new(
            Arc::new(InMemoryReportRepository::seeded()),
            TransitionPolicy::Unrestricted,
        );

        let filter = ReportFilter::new(
            Selection::Only(ReportStatus::Resolved),
            Selection::Only(ReportCategory::Waste),
        );
        let filtered = service.list(&filter).await.unwrap();
        let stats = service.stats().await.unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.resolved, 1);
    }

    #[tokio::test]
    async fn test_update_status_is_persisted() {
        let service = TriageService::new(
            Arc::new(InMemoryReportRepository::seeded()),
            TransitionPolicy::Unrestricted,
        );

        let report = service
            .update_status("3", ReportStatus::InProgress)
            .await
            .unwrap();

        assert_eq!(report.status, ReportStatus::InProgress);
        assert_eq!(
            service.get("3").await.unwrap().status,
            ReportStatus::InProgress
        );
        assert_eq!(service.stats().await.unwrap().in_progress, 2);
    }

    #[tokio::test]
    async fn test_update_status_forward_policy_conflict() {
        let service = TriageService::new(
            Arc::new(InMemoryReportRepository::seeded()),
            TransitionPolicy::Forward,
        );

        let result = service.update_status("1", ReportStatus::Pending).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_get_unknown_report() {
        let service = TriageService::new(
            Arc::new(InMemoryReportRepository::new()),
            TransitionPolicy::Unrestricted,
        );

        assert!(matches!(service.get("1").await, Err(AppError::NotFound(_))));
    }
}
