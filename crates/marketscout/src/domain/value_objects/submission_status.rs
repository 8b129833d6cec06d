//! SubmissionStatus - The four display states of a report form

use serde::{Deserialize, Serialize};

use crate::domain::entities::ActionResult;

/// Display state of a submission
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// A request is in flight; resubmission is disabled
    Loading,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionStatus::Loading)
    }

    /// Alert heading for a settled state
    pub fn title(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Success => Some("Success!"),
            SubmissionStatus::Error => Some("Error"),
            SubmissionStatus::Idle | SubmissionStatus::Loading => None,
        }
    }
}

impl From<&ActionResult> for SubmissionStatus {
    fn from(result: &ActionResult) -> Self {
        if result.success() {
            SubmissionStatus::Success
        } else {
            SubmissionStatus::Error
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Idle => write!(f, "idle"),
            SubmissionStatus::Loading => write!(f, "loading"),
            SubmissionStatus::Success => write!(f, "success"),
            SubmissionStatus::Error => write!(f, "error"),
        }
    }
}
