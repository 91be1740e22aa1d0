//! Response payloads produced for a scoring request

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};

/// Result of one resume/job description comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Match percentage, 0.0 to 100.0, two decimals
    pub match_score: f64,
    pub feedback: String,
    pub missing_keywords: Vec<String>,
}

impl ScoreResult {
    pub fn new(match_score: f64, missing_keywords: Vec<String>) -> Self {
        let feedback = format!(
            "Your resume matches {}% with the job description.",
            format_score(match_score)
        );

        Self {
            match_score,
            feedback,
            missing_keywords,
        }
    }
}

/// Whole numbers keep one decimal place: `100.0`, not `100`.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        format!("{}", score)
    }
}

/// Body rendered for a failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
    #[serde(skip)]
    pub status: u16,
}

impl From<&PipelineError> for ErrorReport {
    fn from(err: &PipelineError) -> Self {
        Self {
            error: err.to_string(),
            status: err.status_code(),
        }
    }
}
