//! Certificate record and expiry classification

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Upper bound (inclusive) of the Critical band in days
pub const CRITICAL_MAX_DAYS: i64 = 2;
/// Upper bound (inclusive) of the Warning band in days
pub const WARNING_MAX_DAYS: i64 = 7;
/// Upper bound (inclusive) of the Notice band in days
pub const NOTICE_MAX_DAYS: i64 = 30;

/// Expiry status of a certificate, derived from days until expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CertStatus {
    Expired,
    Critical,
    Warning,
    Notice,
    Valid,
}

impl fmt::Display for CertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertStatus::Expired => write!(f, "Expired"),
            CertStatus::Critical => write!(f, "Critical"),
            CertStatus::Warning => write!(f, "Warning"),
            CertStatus::Notice => write!(f, "Notice"),
            CertStatus::Valid => write!(f, "Valid"),
        }
    }
}

/// Classify a days-until-expiry value.
///
/// Band boundaries are inclusive and fixed policy, not configuration:
/// `<0` Expired, `0..=2` Critical, `3..=7` Warning, `8..=30` Notice,
/// everything above Valid.
pub fn classify(days_left: i64) -> CertStatus {
    if days_left < 0 {
        CertStatus::Expired
    } else if days_left <= CRITICAL_MAX_DAYS {
        CertStatus::Critical
    } else if days_left <= WARNING_MAX_DAYS {
        CertStatus::Warning
    } else if days_left <= NOTICE_MAX_DAYS {
        CertStatus::Notice
    } else {
        CertStatus::Valid
    }
}

/// Whole days between `now` and `until`, floored.
///
/// Floor division on seconds, not `Duration::num_days` truncation: a
/// certificate expired by one hour is already at day -1.
pub fn days_between(until: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    until.signed_duration_since(now).num_seconds().div_euclid(86_400)
}

/// One row of the expiry report, produced once per parsed certificate file
/// and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct CertificateRecord {
    /// Source file basename
    pub file_name: String,
    /// Subject CN, falling back to the full subject string
    pub domain: String,
    /// Full subject distinguished name as declared
    pub subject_raw: String,
    /// Full issuer distinguished name as declared
    pub issuer_raw: String,
    /// Issuer CN, falling back to the full issuer string
    pub issuer_name: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    /// SHA-1 digest of the DER bytes, uppercase hex
    pub thumbprint: String,
    /// Serial number, uppercase hex with `:` separators
    pub serial_number: String,
    /// Whole days until `not_after` at extraction time (negative if expired)
    pub days_left: i64,
    /// Derived from `days_left` at extraction time, never re-evaluated
    pub status: CertStatus,
    /// Extraction wall-clock time
    pub last_checked: DateTime<Utc>,
    pub country: String,
    pub organization: String,
    pub org_unit: String,
    pub locality: String,
    pub state: String,
    /// Human-readable Key Usage rendering, empty if absent
    pub key_usage: String,
    /// Human-readable Enhanced Key Usage rendering, empty if absent
    pub enhanced_key_usage: String,
    /// Human-readable SAN rendering, empty if absent
    pub subject_alt_names: String,
}

impl CertificateRecord {
    /// Status badge text used in the HTML report
    pub fn badge_text(&self) -> &'static str {
        match self.status {
            CertStatus::Valid => "Valid",
            CertStatus::Notice | CertStatus::Warning => "Expiring soon",
            CertStatus::Critical => "Critical warning",
            CertStatus::Expired => "Expired",
        }
    }

    /// CSS class for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self.status {
            CertStatus::Valid => "valid",
            CertStatus::Notice | CertStatus::Warning => "expiring",
            CertStatus::Critical => "critical",
            CertStatus::Expired => "expired",
        }
    }

    /// Days-left cell text: "Expired" when negative, else "N days"
    pub fn days_left_label(&self) -> String {
        if self.days_left < 0 {
            "Expired".to_string()
        } else {
            format!("{} days", self.days_left)
        }
    }
}
