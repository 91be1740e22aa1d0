//! Scoring pipeline: extract, normalize, score, diff

use crate::config::{Config, RoundingMode};
use crate::error::PipelineError;
use crate::input::text_extractor::{PdfExtractor, TextExtractor};
use crate::output::report::ScoreResult;
use crate::processing::keywords::missing_keywords;
use crate::processing::normalizer::TextNormalizer;
use crate::processing::stop_words::StopWords;
use crate::processing::tfidf::SimilarityScorer;
use log::{debug, info};
use std::sync::Arc;

/// Entry point of the scoring pipeline.
///
/// Holds only immutable state, so one analyzer can serve concurrent
/// requests behind an `Arc`.
pub struct MatchAnalyzer {
    extractor: PdfExtractor,
    normalizer: TextNormalizer,
    scorer: SimilarityScorer,
    max_missing_keywords: usize,
    rounding: RoundingMode,
}

impl Default for MatchAnalyzer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl MatchAnalyzer {
    pub fn new(config: &Config) -> Self {
        let stop_words = Arc::new(StopWords::with_extra(&config.normalizer.extra_stop_words));

        Self {
            extractor: PdfExtractor::new(config.extraction.fallback_extractor),
            normalizer: TextNormalizer::new(stop_words),
            scorer: SimilarityScorer::new(),
            max_missing_keywords: config.scoring.max_missing_keywords,
            rounding: config.scoring.rounding,
        }
    }

    /// Score a PDF resume against a job description.
    pub fn analyze(&self, resume: Option<&[u8]>, job_description: Option<&str>) -> Result<ScoreResult, PipelineError> {
        let resume = match resume {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => return Err(PipelineError::MissingInput("resume file".to_string())),
        };
        let job_description = job_description
            .ok_or_else(|| PipelineError::MissingInput("job description".to_string()))?;

        info!("Analyzing resume ({} bytes) against job description ({} characters)",
            resume.len(), job_description.chars().count());

        let resume_text = self
            .extractor
            .extract(resume)
            .map_err(|e| PipelineError::ComputationError(e.to_string()))?;

        if resume_text.trim().is_empty() {
            return Err(PipelineError::UnextractableDocument);
        }

        self.score_texts(&resume_text, job_description)
    }

    /// Score already-extracted resume text against a job description.
    pub fn score_texts(&self, resume_text: &str, job_description: &str) -> Result<ScoreResult, PipelineError> {
        let resume = self.normalizer.normalize(Some(resume_text));
        let job = self.normalizer.normalize(Some(job_description));

        debug!("Normalized resume: {} tokens, job description: {} tokens",
            resume.tokens().count(), job.tokens().count());

        let similarity = self
            .scorer
            .similarity(&resume, &job)
            .map_err(|e| PipelineError::ComputationError(e.to_string()))?;

        let match_score = self.rounding.round_hundredths(similarity * 100.0);
        let missing = missing_keywords(&resume, &job, self.max_missing_keywords);

        info!("Match score {}% with {} missing keywords", match_score, missing.len());

        Ok(ScoreResult::new(match_score, missing))
    }

    pub fn max_missing_keywords(&self) -> usize {
        self.max_missing_keywords
    }
}
