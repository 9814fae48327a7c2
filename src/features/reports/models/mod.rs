mod report;
mod report_filter;
mod transition;

pub use report::{
    CreateReport, Report, ReportCategory, ReportPriority, ReportStats, ReportStatus,
};
pub use report_filter::{ReportFilter, Selection};
pub use transition::TransitionPolicy;
