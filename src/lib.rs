//! certwatch library
//!
//! Certificate expiry classification and reporting:
//! - Scans a directory of exported PEM/DER certificate files
//! - Classifies each by days until expiry under a fixed threshold policy
//! - Writes a CSV artifact and a self-contained interactive HTML artifact
//! - Optionally emails a run summary with both artifacts attached

pub mod cli;
pub mod config;
pub mod extract;
pub mod models;
pub mod notify;
pub mod report;
pub mod runner;
pub mod scan;
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Settings;
pub use models::{classify, CertStatus, CertificateRecord, ReportSummary};
pub use utils::{CertWatchError, Result};
