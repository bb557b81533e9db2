//! CSV report renderer
//!
//! Fixed 17-column schema consumed downstream; the column order must not
//! change. Quoting and UTF-8 handling come from the csv crate. Rows follow
//! the input order; the CSV artifact is never re-sorted.

use crate::models::CertificateRecord;
use crate::report::fmt_timestamp;
use crate::utils::ReportError;
use std::path::Path;

/// Column order contract for the CSV artifact
pub const CSV_COLUMNS: [&str; 17] = [
    "FileName",
    "Domain",
    "IssuerName",
    "NotBefore",
    "NotAfter",
    "DaysLeft",
    "Status",
    "Thumbprint",
    "SerialNumber",
    "Country",
    "Organization",
    "OrgUnit",
    "Locality",
    "State",
    "KeyUsage",
    "EnhancedKeyUsage",
    "SubjectAltNames",
];

/// Serialize records to CSV bytes, header row included
pub fn render_csv(records: &[CertificateRecord]) -> Result<Vec<u8>, ReportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(CSV_COLUMNS).map_err(csv_error)?;

    for record in records {
        let not_before = fmt_timestamp(record.not_before);
        let not_after = fmt_timestamp(record.not_after);
        let days_left = record.days_left.to_string();
        let status = record.status.to_string();

        writer
            .write_record([
                record.file_name.as_str(),
                record.domain.as_str(),
                record.issuer_name.as_str(),
                not_before.as_str(),
                not_after.as_str(),
                days_left.as_str(),
                status.as_str(),
                record.thumbprint.as_str(),
                record.serial_number.as_str(),
                record.country.as_str(),
                record.organization.as_str(),
                record.org_unit.as_str(),
                record.locality.as_str(),
                record.state.as_str(),
                record.key_usage.as_str(),
                record.enhanced_key_usage.as_str(),
                record.subject_alt_names.as_str(),
            ])
            .map_err(csv_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| ReportError::CsvError {
            message: e.to_string(),
        })
}

/// Render and write the CSV artifact
pub fn write_csv(records: &[CertificateRecord], path: &Path) -> Result<(), ReportError> {
    let bytes = render_csv(records)?;
    std::fs::write(path, bytes).map_err(|e| ReportError::WriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn csv_error(e: csv::Error) -> ReportError {
    ReportError::CsvError {
        message: e.to_string(),
    }
}
