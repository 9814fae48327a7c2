use crate::features::reports::errors::TransitionError;
use crate::features::reports::models::ReportStatus;

/// Rule applied when an administrator changes a report's status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Any status may be set from any other status
    #[default]
    Unrestricted,
    /// Only pending -> in-progress -> resolved; skipping ahead is allowed
    Forward,
}

impl TransitionPolicy {
    pub fn check(&self, from: ReportStatus, to: ReportStatus) -> Result<(), TransitionError> {
        match self {
            TransitionPolicy::Unrestricted => Ok(()),
            TransitionPolicy::Forward if to.rank() < from.rank() => {
                Err(TransitionError::Backward { from, to })
            }
            TransitionPolicy::Forward => Ok(()),
        }
    }
}

impl std::str::FromStr for TransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unrestricted" => Ok(TransitionPolicy::Unrestricted),
            "forward" => Ok(TransitionPolicy::Forward),
            other => Err(format!(
                "Unknown status transition policy '{}' (expected 'unrestricted' or 'forward')",
                other
            )),
        }
    }
}
