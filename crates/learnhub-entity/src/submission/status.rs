//! Submission status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow status of a homework submission.
///
/// A submission starts `Pending` and moves to `Graded` when a grade is
/// recorded. Re-grading keeps it `Graded` and overwrites grade/feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Submitted, awaiting a grade.
    Pending,
    /// A grade has been recorded.
    Graded,
}

impl SubmissionStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Graded => "graded",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = learnhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "graded" => Ok(Self::Graded),
            _ => Err(learnhub_core::AppError::validation(format!(
                "Invalid submission status: '{s}'. Expected one of: pending, graded"
            ))),
        }
    }
}
