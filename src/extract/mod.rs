//! Certificate record extraction
//!
//! Turns one certificate file into one [`CertificateRecord`]. Extraction is
//! a pure transformation of file bytes; failures are returned to the caller
//! for per-file isolation and logging.

pub mod dn;
pub mod extensions;
pub mod reader;

pub use extensions::ExtensionKind;
pub use reader::DetectedFormat;

use crate::models::{classify, days_between, CertificateRecord};
use crate::utils::ExtractionError;
use chrono::{DateTime, TimeZone, Utc};
use sha1::{Digest, Sha1};
use std::path::Path;
use x509_parser::prelude::*;

/// Parse one certificate file into a record.
///
/// `now` is the extraction wall-clock time; it drives both `days_left` and
/// `last_checked` so the status is a pure function of the inputs.
pub fn extract_record(
    path: &Path,
    now: DateTime<Utc>,
) -> Result<CertificateRecord, ExtractionError> {
    let der = reader::read_certificate_der(path)?;

    let (_, cert) = X509Certificate::from_der(&der).map_err(|e| ExtractionError::Decode {
        path: path.display().to_string(),
        message: format!("Failed to parse certificate: {:?}", e),
    })?;

    let subject_raw = cert.subject().to_string();
    let issuer_raw = cert.issuer().to_string();
    let subject = dn::parse_dn(&subject_raw);
    let issuer = dn::parse_dn(&issuer_raw);

    let not_before = asn1_time_to_datetime(cert.validity().not_before, path)?;
    let not_after = asn1_time_to_datetime(cert.validity().not_after, path)?;
    let days_left = days_between(not_after, now);

    let serial_number = cert
        .serial
        .to_bytes_be()
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(":");

    let thumbprint: String = Sha1::digest(&der)
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect();

    // Best effort: a failed extension lookup empties that field only.
    let key_usage = ExtensionKind::KeyUsage.text(&cert).unwrap_or_default();
    let enhanced_key_usage = ExtensionKind::EnhancedKeyUsage
        .text(&cert)
        .unwrap_or_default();
    let subject_alt_names = ExtensionKind::SubjectAltName
        .text(&cert)
        .unwrap_or_default();

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(CertificateRecord {
        file_name,
        domain: subject.name_or_raw(&subject_raw),
        issuer_name: issuer.name_or_raw(&issuer_raw),
        subject_raw,
        issuer_raw,
        not_before,
        not_after,
        thumbprint,
        serial_number,
        days_left,
        status: classify(days_left),
        last_checked: now,
        country: subject.country.unwrap_or_default(),
        organization: subject.organization.unwrap_or_default(),
        org_unit: subject.organizational_unit.unwrap_or_default(),
        locality: subject.locality.unwrap_or_default(),
        state: subject.state.unwrap_or_default(),
        key_usage,
        enhanced_key_usage,
        subject_alt_names,
    })
}

/// Convert ASN.1 time to chrono DateTime
fn asn1_time_to_datetime(time: ASN1Time, path: &Path) -> Result<DateTime<Utc>, ExtractionError> {
    let timestamp = time.timestamp();
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .ok_or_else(|| ExtractionError::InvalidTimestamp {
            path: path.display().to_string(),
        })
}
