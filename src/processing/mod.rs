//! Text normalization and similarity scoring module

pub mod stop_words;
pub mod normalizer;
pub mod tfidf;
pub mod keywords;
pub mod analyzer;

pub use analyzer::MatchAnalyzer;
