//! Data model for certificate expiry reporting

pub mod record;
pub mod summary;

pub use record::{classify, days_between, CertStatus, CertificateRecord};
pub use summary::ReportSummary;
