//! HTML report generation
//!
//! Renders a single self-contained document: KPI tiles, a searchable and
//! filterable table sorted by days until expiry, and a per-row detail
//! drawer fed by a JSON payload embedded in a data attribute. The template
//! is registered under an `.html` name so minijinja applies HTML
//! auto-escaping to every interpolated value, including the JSON payload.

use crate::models::{CertificateRecord, ReportSummary};
use crate::report::fmt_timestamp;
use crate::utils::ReportError;
use chrono::{DateTime, Utc};
use minijinja::{context, Environment, Value};
use std::path::Path;

const REPORT_TEMPLATE: &str = include_str!("../../templates/report.html");

/// HTML report generator
pub struct HtmlReport;

impl HtmlReport {
    /// Render the report with the current wall-clock as generation time
    pub fn render(
        records: &[CertificateRecord],
        summary: &ReportSummary,
    ) -> Result<String, ReportError> {
        Self::render_at(records, summary, Utc::now())
    }

    /// Render the report for an explicit generation timestamp.
    ///
    /// Output is byte-stable for a given record set and timestamp: rows are
    /// sorted by days left with domain and file name as tie-breakers, so the
    /// completion order of a parallel scan never shows through.
    pub fn render_at(
        records: &[CertificateRecord],
        summary: &ReportSummary,
        generated_at: DateTime<Utc>,
    ) -> Result<String, ReportError> {
        let mut env = Environment::new();
        env.add_template("report.html", REPORT_TEMPLATE)
            .map_err(template_error)?;
        let template = env.get_template("report.html").map_err(template_error)?;

        let mut sorted: Vec<&CertificateRecord> = records.iter().collect();
        sorted.sort_by(|a, b| {
            a.days_left
                .cmp(&b.days_left)
                .then_with(|| a.domain.cmp(&b.domain))
                .then_with(|| a.file_name.cmp(&b.file_name))
        });

        let rows: Vec<Value> = sorted.iter().map(|record| build_row(record)).collect();

        template
            .render(context! {
                generated_at => fmt_timestamp(generated_at),
                total => summary.total,
                valid => summary.valid,
                expiring_soon => summary.expiring_soon,
                critical => summary.critical,
                rows => rows,
            })
            .map_err(template_error)
    }

    /// Render and write the HTML artifact
    pub fn write(
        records: &[CertificateRecord],
        summary: &ReportSummary,
        path: &Path,
    ) -> Result<(), ReportError> {
        let html = Self::render(records, summary)?;
        std::fs::write(path, html).map_err(|e| ReportError::WriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Build one table row's template context, including the detail payload.
///
/// The payload carries every extracted field as JSON. It ends up inside a
/// `data-details` attribute, so the template's attribute escaping and the
/// browser's entity decoding form the escape/unescape pair around
/// `JSON.parse`.
fn build_row(record: &CertificateRecord) -> Value {
    let details = serde_json::json!({
        "file_name": record.file_name,
        "domain": record.domain,
        "subject_raw": record.subject_raw,
        "issuer_raw": record.issuer_raw,
        "issuer_name": record.issuer_name,
        "not_before": fmt_timestamp(record.not_before),
        "not_after": fmt_timestamp(record.not_after),
        "days_left": record.days_left,
        "status": record.status.to_string(),
        "thumbprint": record.thumbprint,
        "serial_number": record.serial_number,
        "last_checked": fmt_timestamp(record.last_checked),
        "country": record.country,
        "organization": record.organization,
        "org_unit": record.org_unit,
        "locality": record.locality,
        "state": record.state,
        "key_usage": record.key_usage,
        "enhanced_key_usage": record.enhanced_key_usage,
        "subject_alt_names": record.subject_alt_names,
    })
    .to_string();

    context! {
        domain => &record.domain,
        badge => record.badge_text(),
        badge_class => record.badge_class(),
        issuer => &record.issuer_name,
        not_after => fmt_timestamp(record.not_after),
        days_label => record.days_left_label(),
        last_checked => fmt_timestamp(record.last_checked),
        details => details,
    }
}

fn template_error(e: minijinja::Error) -> ReportError {
    ReportError::TemplateError {
        message: e.to_string(),
    }
}
