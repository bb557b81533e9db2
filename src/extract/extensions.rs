//! Typed extension lookup
//!
//! Replaces string-keyed friendly-name access with a fixed, enumerated set
//! of extension kinds. Each kind renders to a human-readable string; any
//! lookup or formatting failure yields `None` and never fails the record.

use x509_parser::prelude::*;

/// The certificate extensions surfaced in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionKind {
    KeyUsage,
    EnhancedKeyUsage,
    SubjectAltName,
}

impl ExtensionKind {
    /// Render this extension as a comma-joined display string.
    ///
    /// Returns `None` when the extension is absent or unparseable.
    pub fn text(self, cert: &X509Certificate<'_>) -> Option<String> {
        let parts = match self {
            ExtensionKind::KeyUsage => key_usage_names(cert)?,
            ExtensionKind::EnhancedKeyUsage => extended_key_usage_names(cert)?,
            ExtensionKind::SubjectAltName => san_names(cert)?,
        };
        Some(parts.join(", "))
    }
}

fn key_usage_names(cert: &X509Certificate<'_>) -> Option<Vec<String>> {
    let ku = cert.key_usage().ok()??;
    let flags = ku.value;
    let mut usages = Vec::new();

    if flags.digital_signature() {
        usages.push("Digital Signature".to_string());
    }
    if flags.non_repudiation() {
        usages.push("Non-Repudiation".to_string());
    }
    if flags.key_encipherment() {
        usages.push("Key Encipherment".to_string());
    }
    if flags.data_encipherment() {
        usages.push("Data Encipherment".to_string());
    }
    if flags.key_agreement() {
        usages.push("Key Agreement".to_string());
    }
    if flags.key_cert_sign() {
        usages.push("Certificate Sign".to_string());
    }
    if flags.crl_sign() {
        usages.push("CRL Sign".to_string());
    }

    Some(usages)
}

fn extended_key_usage_names(cert: &X509Certificate<'_>) -> Option<Vec<String>> {
    let eku = cert.extended_key_usage().ok()??;
    let mut usages = Vec::new();

    if eku.value.any {
        usages.push("Any Purpose".to_string());
    }
    if eku.value.server_auth {
        usages.push("Server Authentication".to_string());
    }
    if eku.value.client_auth {
        usages.push("Client Authentication".to_string());
    }
    if eku.value.code_signing {
        usages.push("Code Signing".to_string());
    }
    if eku.value.email_protection {
        usages.push("Email Protection".to_string());
    }
    if eku.value.time_stamping {
        usages.push("Time Stamping".to_string());
    }
    if eku.value.ocsp_signing {
        usages.push("OCSP Signing".to_string());
    }
    for oid in &eku.value.other {
        usages.push(oid.to_string());
    }

    Some(usages)
}

fn san_names(cert: &X509Certificate<'_>) -> Option<Vec<String>> {
    let san = cert.subject_alternative_name().ok()??;
    let mut names = Vec::new();

    for name in &san.value.general_names {
        match name {
            GeneralName::DNSName(dns) => names.push(dns.to_string()),
            GeneralName::RFC822Name(email) => names.push(email.to_string()),
            GeneralName::URI(uri) => names.push(uri.to_string()),
            GeneralName::IPAddress(ip) => {
                if ip.len() == 4 {
                    names.push(format!("{}.{}.{}.{}", ip[0], ip[1], ip[2], ip[3]));
                } else if ip.len() == 16 {
                    let parts: Vec<String> = ip
                        .chunks(2)
                        .map(|c| format!("{:02x}{:02x}", c[0], c[1]))
                        .collect();
                    names.push(parts.join(":"));
                }
            }
            _ => {}
        }
    }

    Some(names)
}
