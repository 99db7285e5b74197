//! Error types for scenario loading and snapshot export.
//!
//! The physics itself never fails; these only come from I/O at the edges.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
}

pub type Result<T> = std::result::Result<T, OrreryError>;
