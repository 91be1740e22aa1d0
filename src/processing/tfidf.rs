//! TF-IDF vector-space model and cosine similarity
//!
//! The model is fitted jointly over the documents being compared:
//! raw term counts, smoothed idf `ln((1 + n) / (1 + df)) + 1`, and
//! L2-normalized document vectors.

use crate::processing::normalizer::NormalizedText;
use log::debug;
use regex::Regex;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("empty vocabulary; perhaps the documents only contain stop words")]
    EmptyVocabulary,
}

/// Fitted vocabulary and idf weights.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfModel {
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&index| self.idf[index])
    }
}

pub struct TfidfVectorizer {
    token_pattern: Regex,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        // Single-character tokens never enter the vocabulary
        let token_pattern = Regex::new(r"\b\w\w+\b").expect("Invalid token regex");
        Self { token_pattern }
    }

    fn analyze<'a>(&self, document: &'a str) -> Vec<&'a str> {
        self.token_pattern
            .find_iter(document)
            .map(|m| m.as_str())
            .collect()
    }

    /// Fit the model over `documents` and return one L2-normalized vector per document.
    pub fn fit_transform(&self, documents: &[&str]) -> Result<(TfidfModel, Vec<Vec<f64>>), ScoringError> {
        let analyzed: Vec<Vec<&str>> = documents.iter().map(|doc| self.analyze(doc)).collect();

        let mut vocabulary: BTreeMap<String, usize> = analyzed
            .iter()
            .flatten()
            .map(|term| (term.to_string(), 0))
            .collect();

        if vocabulary.is_empty() {
            return Err(ScoringError::EmptyVocabulary);
        }

        for (index, slot) in vocabulary.values_mut().enumerate() {
            *slot = index;
        }

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for terms in &analyzed {
            let unique: HashSet<&str> = terms.iter().copied().collect();
            for term in unique {
                document_frequency[vocabulary[term]] += 1;
            }
        }

        let n_documents = documents.len() as f64;
        let idf: Vec<f64> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n_documents) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let vectors = analyzed
            .iter()
            .map(|terms| {
                let mut vector = vec![0.0; vocabulary.len()];
                for term in terms {
                    vector[vocabulary[*term]] += 1.0;
                }
                for (weight, idf) in vector.iter_mut().zip(&idf) {
                    *weight *= idf;
                }
                l2_normalize(&mut vector);
                vector
            })
            .collect();

        debug!("Fitted TF-IDF model over {} documents, {} terms", documents.len(), vocabulary.len());

        Ok((TfidfModel { vocabulary, idf }, vectors))
    }
}

fn l2_normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for weight in vector.iter_mut() {
            *weight /= norm;
        }
    }
}

/// Cosine of the angle between two vectors; zero vectors score 0.0.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Scores a resume against a job description.
#[derive(Default)]
pub struct SimilarityScorer {
    vectorizer: TfidfVectorizer,
}

impl SimilarityScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cosine similarity in [0, 1] of the two documents' TF-IDF vectors.
    pub fn similarity(&self, resume: &NormalizedText, job_description: &NormalizedText) -> Result<f64, ScoringError> {
        let (_, vectors) = self
            .vectorizer
            .fit_transform(&[resume.as_str(), job_description.as_str()])?;

        Ok(cosine_similarity(&vectors[0], &vectors[1]))
    }
}
