//! Unified application error type.
//! All modules (config, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Source data
    // ---------------------------
    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{column}' in {path}")]
    MissingColumn { column: String, path: String },

    #[error("Invalid timestamp at row {row}: '{value}'")]
    InvalidTimestamp { row: usize, value: String },

    #[error("Invalid number in column '{column}' at row {row}: '{value}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    // ---------------------------
    // Selection errors
    // ---------------------------
    #[error("No data source configured for city: {0}")]
    UnknownCity(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
