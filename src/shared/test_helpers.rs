#[cfg(test)]
use chrono::NaiveDate;

#[cfg(test)]
use crate::features::reports::models::{Report, ReportCategory, ReportStatus};

#[cfg(test)]
pub fn report_with(id: &str, status: ReportStatus, category: ReportCategory) -> Report {
    Report {
        id: id.to_string(),
        title: format!("Report {}", id),
        description: format!("Description for report {}", id),
        category,
        status,
        location: "Test Street".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        priority: None,
        submitted_by: None,
    }
}
