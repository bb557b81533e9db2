//! Utility modules for certwatch
//!
//! This module contains error types and progress indicators.

pub mod error;
pub mod progress;

pub use error::{
    CertWatchError, ConfigError, ExtractionError, NotifyError, ReportError, Result, ScanError,
};
