use chrono::NaiveDate;

use crate::features::reports::models::{Report, ReportCategory, ReportPriority, ReportStatus};

fn january_2024(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).expect("valid seed date")
}

/// Sample reports shown before anyone submits, newest first
pub fn sample_reports() -> Vec<Report> {
    vec![
        Report {
            id: "1".to_string(),
            title: "Pothole on Main Street".to_string(),
            description: "Large pothole causing damage to vehicles near the intersection"
                .to_string(),
            category: ReportCategory::Roads,
            status: ReportStatus::InProgress,
            location: "Main Street, Downtown".to_string(),
            date: january_2024(8),
            priority: Some(ReportPriority::High),
            submitted_by: Some("John Doe".to_string()),
        },
        Report {
            id: "2".to_string(),
            title: "Broken streetlight".to_string(),
            description: "Streetlight not working, creating safety hazard for pedestrians"
                .to_string(),
            category: ReportCategory::Infrastructure,
            status: ReportStatus::Pending,
            location: "Oak Avenue".to_string(),
            date: january_2024(7),
            priority: Some(ReportPriority::Medium),
            submitted_by: Some("Jane Smith".to_string()),
        },
        Report {
            id: "3".to_string(),
            title: "Illegal waste dumping".to_string(),
            description: "Construction waste dumped in public park area".to_string(),
            category: ReportCategory::Waste,
            status: ReportStatus::Resolved,
            location: "Central Park".to_string(),
            date: january_2024(6),
            priority: Some(ReportPriority::High),
            submitted_by: Some("Mike Johnson".to_string()),
        },
        Report {
            id: "4".to_string(),
            title: "Damaged sidewalk".to_string(),
            description: "Cracked sidewalk poses tripping hazard".to_string(),
            category: ReportCategory::Infrastructure,
            status: ReportStatus::Pending,
            location: "Pine Street".to_string(),
            date: january_2024(5),
            priority: Some(ReportPriority::Low),
            submitted_by: Some("Sarah Wilson".to_string()),
        },
    ]
}
