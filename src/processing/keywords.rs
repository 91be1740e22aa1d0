//! Job-description keywords missing from the resume

use crate::processing::normalizer::NormalizedText;
use std::collections::HashSet;

pub const DEFAULT_MAX_MISSING_KEYWORDS: usize = 15;

/// Job tokens absent from the resume, in first-occurrence order of the job
/// description, deduplicated and capped at `limit`.
pub fn missing_keywords(resume: &NormalizedText, job_description: &NormalizedText, limit: usize) -> Vec<String> {
    let resume_tokens: HashSet<&str> = resume.tokens().collect();
    let mut seen = HashSet::new();

    job_description
        .tokens()
        .filter(|token| !resume_tokens.contains(token))
        .filter(|token| seen.insert(*token))
        .take(limit)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::normalizer::TextNormalizer;

    fn normalized(text: &str) -> NormalizedText {
        TextNormalizer::default().normalize(Some(text))
    }

    #[test]
    fn test_missing_keywords_in_job_order() {
        let resume = normalized("Experienced Python developer with Flask and React skills");
        let job = normalized("Looking for Python developer with Django and React experience");

        let missing = missing_keywords(&resume, &job, DEFAULT_MAX_MISSING_KEYWORDS);

        assert_eq!(missing, vec!["looking", "django", "experience"]);
    }

    #[test]
    fn test_no_missing_keywords() {
        let resume = normalized("Rust Tokio Serde Axum PostgreSQL");
        let job = normalized("We want Rust and Tokio, plus Axum.");

        assert!(missing_keywords(&resume, &job, DEFAULT_MAX_MISSING_KEYWORDS).is_empty());
    }

    #[test]
    fn test_duplicates_reported_once() {
        let resume = normalized("rust");
        let job = normalized("go go kotlin go kotlin rust");

        assert_eq!(missing_keywords(&resume, &job, DEFAULT_MAX_MISSING_KEYWORDS), vec!["go", "kotlin"]);
    }

    #[test]
    fn test_truncated_to_limit() {
        let job_text: Vec<String> = (b'a'..=b'z')
            .map(|c| format!("skill{}", c as char))
            .collect();
        let job = normalized(&job_text.join(" "));
        let resume = normalized("unrelated");

        let missing = missing_keywords(&resume, &job, DEFAULT_MAX_MISSING_KEYWORDS);

        assert_eq!(missing.len(), 15);
        assert_eq!(missing.first().map(String::as_str), Some("skilla"));
        assert_eq!(missing.last().map(String::as_str), Some("skillo"));
        assert_eq!(missing_keywords(&resume, &job, 3).len(), 3);
    }

    #[test]
    fn test_empty_job_description() {
        let resume = normalized("python");
        assert!(missing_keywords(&resume, &NormalizedText::default(), DEFAULT_MAX_MISSING_KEYWORDS).is_empty());
    }
}
