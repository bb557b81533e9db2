//! Custom error types for certwatch
//!
//! This module defines domain-specific error types using `thiserror` for
//! the failure modes of the scan/classify/report pipeline.

use thiserror::Error;

/// Top-level error type for the certwatch application
#[derive(Error, Debug)]
pub enum CertWatchError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Certificate extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Report generation error: {0}")]
    Report(#[from] ReportError),

    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Directory scan errors
///
/// A missing input directory is the only run-aborting condition in the
/// pipeline; everything below it degrades per item.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Certificate directory not found: {path}")]
    MissingDirectory { path: String },

    #[error("Failed to read directory {path}: {message}")]
    ReadDir { path: String, message: String },
}

/// Per-file certificate extraction errors
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Failed to read {path}: {message}")]
    FileRead { path: String, message: String },

    #[error("Failed to decode certificate in {path}: {message}")]
    Decode { path: String, message: String },

    #[error("Invalid validity timestamp in {path}")]
    InvalidTimestamp { path: String },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Report generation errors
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Template rendering failed: {message}")]
    TemplateError { message: String },

    #[error("CSV serialization failed: {message}")]
    CsvError { message: String },

    #[error("Failed to write report to {path}: {message}")]
    WriteError { path: String, message: String },
}

/// Email notification errors
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("SMTP transport error: {message}")]
    Transport { message: String },

    #[error("Failed to build message: {message}")]
    Message { message: String },

    #[error("Failed to attach {path}: {message}")]
    Attachment { path: String, message: String },
}

/// Result type alias using CertWatchError
pub type Result<T> = std::result::Result<T, CertWatchError>;
