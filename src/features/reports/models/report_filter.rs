use std::str::FromStr;

use crate::features::reports::models::{Report, ReportCategory, ReportStatus};

/// Value of a filter dropdown: either "all" or one concrete member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }
}

impl<T: FromStr<Err = String>> Selection<T> {
    /// Parse a query value; absent, empty and "all" all select everything
    pub fn parse(raw: Option<&str>) -> Result<Self, String> {
        match raw.map(str::trim) {
            None | Some("") | Some("all") => Ok(Selection::All),
            Some(value) => value.parse().map(Selection::Only),
        }
    }
}

/// Status and category selection applied to the report list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub status: Selection<ReportStatus>,
    pub category: Selection<ReportCategory>,
}

impl ReportFilter {
    pub fn new(status: Selection<ReportStatus>, category: Selection<ReportCategory>) -> Self {
        Self { status, category }
    }

    pub fn matches(&self, report: &Report) -> bool {
        self.status.matches(&report.status) && self.category.matches(&report.category)
    }
}
