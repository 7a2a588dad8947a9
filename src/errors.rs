//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid hours value: {0}")]
    InvalidHours(String),

    #[error("Invalid entry kind: {0}")]
    InvalidEntryKind(String),

    #[error("Invalid weekend policy: {0}")]
    InvalidWeekendPolicy(String),

    // ---------------------------
    // Lookup / logic errors
    // ---------------------------
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Unknown project: {0}")]
    UnknownProject(String),

    #[error("User '{user}' is not a member of project '{project}'")]
    NotAMember { user: String, project: String },

    #[error("Required data is unavailable: {0}")]
    DataUnavailable(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
