//! Resume scorer library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{PipelineError, Result, ResumeScorerError};
pub use output::report::ScoreResult;
pub use processing::MatchAnalyzer;
