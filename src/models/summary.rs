//! Run summary statistics

use crate::models::{CertStatus, CertificateRecord};
use serde::Serialize;

/// Counts by status over a record set, recomputed every run.
///
/// The `critical` count covers `Critical` only; `Expired` is tracked
/// separately. The HTML filter dropdown is the one place that groups the
/// two together, via [`ReportSummary::critical_and_expired`].
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub valid: usize,
    /// Notice + Warning
    pub expiring_soon: usize,
    pub critical: usize,
    pub expired: usize,
}

impl ReportSummary {
    /// Single pass count over the record set
    pub fn from_records(records: &[CertificateRecord]) -> Self {
        let mut summary = ReportSummary {
            total: records.len(),
            ..Default::default()
        };
        for record in records {
            match record.status {
                CertStatus::Valid => summary.valid += 1,
                CertStatus::Notice | CertStatus::Warning => summary.expiring_soon += 1,
                CertStatus::Critical => summary.critical += 1,
                CertStatus::Expired => summary.expired += 1,
            }
        }
        summary
    }

    /// Grouping used by the report's "Critical & Expired" filter bucket
    pub fn critical_and_expired(&self) -> usize {
        self.critical + self.expired
    }
}
