//! Error handling for the resume scorer

use thiserror::Error;

/// Failures of a single scoring request.
///
/// Every path out of the pipeline ends in one of these three kinds, so the
/// caller can always render a response.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("No extractable text found in the resume. It may be a scanned image; please upload a text-based PDF.")]
    UnextractableDocument,

    #[error("{0}")]
    ComputationError(String),
}

impl PipelineError {
    /// Status code an HTTP front end should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            PipelineError::MissingInput(_) => 400,
            PipelineError::UnextractableDocument => 422,
            PipelineError::ComputationError(_) => 500,
        }
    }

    /// Whether the caller can fix the request and try again.
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

#[derive(Error, Debug)]
pub enum ResumeScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Analysis failed: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeScorerError>;
