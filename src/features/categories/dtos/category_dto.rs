use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::reports::models::ReportCategory;
use crate::features::reports::presentation::category_label;

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    /// Value accepted by the submission form and filters
    pub value: ReportCategory,
    pub label: String,
}

impl From<ReportCategory> for CategoryResponseDto {
    fn from(c: ReportCategory) -> Self {
        Self {
            value: c,
            label: category_label(c).to_string(),
        }
    }
}
