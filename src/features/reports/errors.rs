use thiserror::Error;

use crate::core::error::AppError;
use crate::features::reports::models::ReportStatus;

/// Rejection of a citizen submission; the store is never touched when raised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Description and category are required to submit a report.")]
    MissingFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Cannot move report from '{from}' back to '{to}'")]
    Backward { from: ReportStatus, to: ReportStatus },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Report {0} not found")]
    NotFound(String),

    #[error("Report {0} already exists")]
    DuplicateId(String),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => AppError::NotFound(err.to_string()),
            StoreError::DuplicateId(_) | StoreError::Transition(_) => {
                AppError::Conflict(err.to_string())
            }
        }
    }
}
