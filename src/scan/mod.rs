//! Concurrent scan orchestrator
//!
//! Enumerates certificate files in a directory and fans extraction out over
//! a bounded worker pool. Failures are isolated per file: each one is logged
//! at ERROR level and excluded from the result set, and the batch always
//! runs to completion. A missing directory is the only fatal condition.

use crate::extract::extract_record;
use crate::models::CertificateRecord;
use crate::utils::ScanError;
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use tracing::error;

/// Result of scanning one directory
#[derive(Debug)]
pub struct ScanOutcome {
    /// Number of matching files dispatched to the extractor
    pub files_scanned: usize,
    /// Successfully parsed records, unordered when scanned in parallel
    pub records: Vec<CertificateRecord>,
    /// Number of files that failed extraction
    pub failures: usize,
}

/// Directory scanner with a bounded concurrency level
pub struct Scanner {
    extension: String,
    parallel: usize,
}

impl Scanner {
    /// Create a scanner for files with the given extension.
    ///
    /// `parallel <= 1` selects the sequential driver; both drivers invoke
    /// the same extractor.
    pub fn new(extension: impl Into<String>, parallel: usize) -> Self {
        Self {
            extension: extension.into(),
            parallel: parallel.max(1),
        }
    }

    /// Enumerate matching files, non-recursive, in sorted order
    pub fn enumerate(&self, dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
        if !dir.is_dir() {
            return Err(ScanError::MissingDirectory {
                path: dir.display().to_string(),
            });
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ScanError::ReadDir {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case(self.extension.as_str()))
            })
            .collect();
        files.sort();

        Ok(files)
    }

    /// Scan a directory and extract a record per parseable file.
    ///
    /// Guarantee: `records.len() + failures == files_scanned`; every failure
    /// is logged before the scan returns.
    pub async fn scan(
        &self,
        dir: &Path,
        progress: Option<&ProgressBar>,
    ) -> Result<ScanOutcome, ScanError> {
        let files = self.enumerate(dir)?;
        Ok(self.scan_files(files, progress).await)
    }

    /// Extract a record per parseable file from an already-enumerated list
    pub async fn scan_files(
        &self,
        files: Vec<PathBuf>,
        progress: Option<&ProgressBar>,
    ) -> ScanOutcome {
        let files_scanned = files.len();
        let now = Utc::now();

        let (records, failures) = if self.parallel <= 1 {
            self.scan_sequential(files, now, progress)
        } else {
            self.scan_parallel(files, now, progress).await
        };

        debug_assert_eq!(records.len() + failures, files_scanned);

        ScanOutcome {
            files_scanned,
            records,
            failures,
        }
    }

    fn scan_sequential(
        &self,
        files: Vec<PathBuf>,
        now: DateTime<Utc>,
        progress: Option<&ProgressBar>,
    ) -> (Vec<CertificateRecord>, usize) {
        let mut records = Vec::with_capacity(files.len());
        let mut failures = 0usize;

        for path in files {
            match extract_record(&path, now) {
                Ok(record) => records.push(record),
                Err(e) => {
                    error!(path = %path.display(), error = %e, "failed to extract certificate");
                    failures += 1;
                }
            }
            if let Some(pb) = progress {
                pb.inc(1);
            }
        }

        (records, failures)
    }

    async fn scan_parallel(
        &self,
        files: Vec<PathBuf>,
        now: DateTime<Utc>,
        progress: Option<&ProgressBar>,
    ) -> (Vec<CertificateRecord>, usize) {
        let results: Vec<Option<CertificateRecord>> = stream::iter(files)
            .map(|path| async move {
                let worker_path = path.clone();
                let outcome =
                    tokio::task::spawn_blocking(move || extract_record(&worker_path, now)).await;

                match outcome {
                    Ok(Ok(record)) => Some(record),
                    Ok(Err(e)) => {
                        error!(path = %path.display(), error = %e, "failed to extract certificate");
                        None
                    }
                    Err(e) => {
                        error!(path = %path.display(), error = %e, "extraction worker panicked");
                        None
                    }
                }
            })
            .buffer_unordered(self.parallel)
            .inspect(|_| {
                if let Some(pb) = progress {
                    pb.inc(1);
                }
            })
            .collect()
            .await;

        let failures = results.iter().filter(|r| r.is_none()).count();
        let records = results.into_iter().flatten().collect();

        (records, failures)
    }
}
