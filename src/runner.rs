//! Run pipeline driver
//!
//! Drives one report run end to end: enumerate, extract, aggregate, write
//! both artifacts, notify. Only a missing certificate directory aborts the
//! run; artifact writes and the email are attempted independently and their
//! failures are logged, not propagated.

use crate::config::Settings;
use crate::models::ReportSummary;
use crate::notify::EmailNotifier;
use crate::report::{csv, HtmlReport};
use crate::scan::Scanner;
use crate::utils::progress::create_progress_bar;
use crate::utils::Result;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Per-invocation behavior toggles
pub struct RunOptions {
    pub show_progress: bool,
    pub send_email: bool,
}

/// Observable result of a completed run
pub struct RunOutcome {
    pub files_found: usize,
    pub records: usize,
    pub failures: usize,
    pub summary: ReportSummary,
    pub csv_written: Option<PathBuf>,
    pub html_written: Option<PathBuf>,
}

/// Execute one full report run
pub async fn run(settings: &Settings, options: &RunOptions) -> Result<RunOutcome> {
    let scanner = Scanner::new(settings.scan.extension.clone(), settings.scan.parallel);

    let files = scanner.enumerate(&settings.scan.cert_dir)?;
    info!(
        dir = %settings.scan.cert_dir.display(),
        files = files.len(),
        "certificate scan started"
    );

    if files.is_empty() {
        info!("no certificate files found; no reports generated");
        return Ok(RunOutcome {
            files_found: 0,
            records: 0,
            failures: 0,
            summary: ReportSummary::default(),
            csv_written: None,
            html_written: None,
        });
    }

    let bar = options
        .show_progress
        .then(|| create_progress_bar(files.len() as u64, "Scanning certificates"));
    let outcome = scanner.scan_files(files, bar.as_ref()).await;
    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    let summary = ReportSummary::from_records(&outcome.records);
    info!(
        files = outcome.files_scanned,
        records = outcome.records.len(),
        failures = outcome.failures,
        "extraction complete"
    );

    let csv_written = write_artifact(&settings.output.csv_path, "CSV", || {
        csv::write_csv(&outcome.records, &settings.output.csv_path)
    });
    let html_written = write_artifact(&settings.output.html_path, "HTML", || {
        HtmlReport::write(&outcome.records, &summary, &settings.output.html_path)
    });

    if options.send_email && settings.email.enabled {
        send_notification(settings, &summary, csv_written.as_deref(), html_written.as_deref())
            .await;
    }

    Ok(RunOutcome {
        files_found: outcome.files_scanned,
        records: outcome.records.len(),
        failures: outcome.failures,
        summary,
        csv_written,
        html_written,
    })
}

/// Attempt one artifact write; a failure is logged and leaves the other
/// artifact unaffected.
fn write_artifact<F>(path: &Path, label: &str, write: F) -> Option<PathBuf>
where
    F: FnOnce() -> std::result::Result<(), crate::utils::ReportError>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "failed to create report directory");
            }
        }
    }

    match write() {
        Ok(()) => {
            info!(path = %path.display(), "{} report written", label);
            Some(path.to_path_buf())
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "{} report not written", label);
            None
        }
    }
}

/// Send the summary email; failures never escalate past a log entry.
async fn send_notification(
    settings: &Settings,
    summary: &ReportSummary,
    csv_path: Option<&Path>,
    html_path: Option<&Path>,
) {
    let notifier = match EmailNotifier::from_settings(&settings.email) {
        Ok(notifier) => notifier,
        Err(e) => {
            warn!(error = %e, "email notification skipped");
            return;
        }
    };

    let attachments: Vec<&Path> = [csv_path, html_path].into_iter().flatten().collect();

    match notifier.send_summary(summary, &attachments).await {
        Ok(()) => info!("summary email sent"),
        Err(e) => warn!(error = %e, "email notification failed"),
    }
}
