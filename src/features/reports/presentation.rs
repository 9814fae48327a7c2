//! Static display tables for statuses, priorities and categories.
//!
//! Colours are badge variant names and icons are icon identifiers; clients
//! decide how to render them.

use crate::features::reports::models::{ReportCategory, ReportPriority, ReportStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

pub fn status_style(status: ReportStatus) -> StatusStyle {
    match status {
        ReportStatus::Pending => StatusStyle {
            icon: "clock",
            color: "warning",
        },
        ReportStatus::InProgress => StatusStyle {
            icon: "alert-triangle",
            color: "default",
        },
        ReportStatus::Resolved => StatusStyle {
            icon: "check-circle",
            color: "success",
        },
    }
}

/// Human readable status, e.g. "in progress"
pub fn status_label(status: ReportStatus) -> String {
    status.as_str().replacen('-', " ", 1)
}

pub fn priority_color(priority: ReportPriority) -> &'static str {
    match priority {
        ReportPriority::High => "destructive",
        ReportPriority::Medium => "warning",
        ReportPriority::Low => "secondary",
    }
}

pub fn category_label(category: ReportCategory) -> &'static str {
    match category {
        ReportCategory::Roads => "Roads & Transportation",
        ReportCategory::Waste => "Waste Management",
        ReportCategory::Infrastructure => "Public Infrastructure",
        ReportCategory::Environment => "Environmental Issues",
        ReportCategory::Safety => "Public Safety",
        ReportCategory::Other => "Other",
    }
}
