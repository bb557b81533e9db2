//! Certificate file reading and format detection
//!
//! Auto-detects PEM and DER encodings and returns the DER-encoded
//! certificate bytes. Exported files never carry private keys.

use crate::utils::ExtractionError;
use std::path::Path;
use x509_parser::prelude::*;

/// Detected certificate file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedFormat {
    Pem,
    Der,
}

impl std::fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectedFormat::Pem => write!(f, "PEM"),
            DetectedFormat::Der => write!(f, "DER"),
        }
    }
}

/// Detect the encoding of certificate bytes, if any
pub fn detect_format_from_bytes(data: &[u8]) -> Option<DetectedFormat> {
    // Check for PEM markers
    if let Ok(text) = std::str::from_utf8(data) {
        if text.contains("-----BEGIN ") {
            return Some(DetectedFormat::Pem);
        }
    }

    // Try parsing as DER X.509
    if X509Certificate::from_der(data).is_ok() {
        return Some(DetectedFormat::Der);
    }

    // If none matched but starts with 0x30 (ASN.1 SEQUENCE), assume DER
    if !data.is_empty() && data[0] == 0x30 {
        return Some(DetectedFormat::Der);
    }

    None
}

/// Read a certificate file and return the DER bytes of its first
/// CERTIFICATE block.
pub fn read_certificate_der(path: &Path) -> Result<Vec<u8>, ExtractionError> {
    let data = std::fs::read(path).map_err(|e| ExtractionError::FileRead {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let format =
        detect_format_from_bytes(&data).ok_or_else(|| ExtractionError::Decode {
            path: path.display().to_string(),
            message: "not a PEM or DER encoded certificate".to_string(),
        })?;

    match format {
        DetectedFormat::Pem => {
            let pems = ::pem::parse_many(&data).map_err(|e| ExtractionError::Decode {
                path: path.display().to_string(),
                message: format!("Failed to parse PEM: {}", e),
            })?;

            pems.into_iter()
                .find(|p| p.tag() == "CERTIFICATE")
                .map(|p| p.into_contents())
                .ok_or_else(|| ExtractionError::Decode {
                    path: path.display().to_string(),
                    message: "No CERTIFICATE block found in PEM file".to_string(),
                })
        }
        DetectedFormat::Der => {
            X509Certificate::from_der(&data).map_err(|e| ExtractionError::Decode {
                path: path.display().to_string(),
                message: format!("Failed to parse DER certificate: {:?}", e),
            })?;
            Ok(data)
        }
    }
}
