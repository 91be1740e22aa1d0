//! Output rendering module

pub mod report;
pub mod formatter;
