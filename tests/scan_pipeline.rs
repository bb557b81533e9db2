//! Scan pipeline integration tests
//!
//! Exercises directory enumeration, per-file failure isolation and the
//! sequential/parallel drivers against certificates minted into a temp dir.

use certwatch::models::classify;
use certwatch::scan::Scanner;
use certwatch::utils::ScanError;
use rcgen::{CertificateParams, DistinguishedName, DnType, KeyPair};
use std::path::Path;
use tempfile::TempDir;
use time::{Duration, OffsetDateTime};

/// Mint a self-signed certificate valid for `valid_for` and write it as PEM.
fn mint_cert(dir: &Path, file_name: &str, cn: &str, valid_for: Duration) {
    let mut params = CertificateParams::new(vec![cn.to_string()]).unwrap();
    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, cn);
    params.distinguished_name = dn;

    let now = OffsetDateTime::now_utc();
    params.not_before = now - Duration::days(1);
    params.not_after = now + valid_for;

    let key = KeyPair::generate().unwrap();
    let cert = params.self_signed(&key).unwrap();
    std::fs::write(dir.join(file_name), cert.pem()).unwrap();
}

#[tokio::test]
async fn failures_are_isolated_per_file() {
    let dir = TempDir::new().unwrap();
    mint_cert(dir.path(), "a.cer", "a.example.com", Duration::days(90));
    mint_cert(dir.path(), "b.cer", "b.example.com", Duration::days(10));
    mint_cert(dir.path(), "c.cer", "c.example.com", Duration::days(-5));
    std::fs::write(dir.path().join("broken1.cer"), b"garbage").unwrap();
    std::fs::write(dir.path().join("broken2.cer"), b"-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n").unwrap();

    let scanner = Scanner::new("cer", 4);
    let outcome = scanner.scan(dir.path(), None).await.unwrap();

    assert_eq!(outcome.files_scanned, 5);
    assert_eq!(outcome.records.len(), 3);
    assert_eq!(outcome.failures, 2);

    let mut domains: Vec<&str> = outcome.records.iter().map(|r| r.domain.as_str()).collect();
    domains.sort();
    assert_eq!(domains, ["a.example.com", "b.example.com", "c.example.com"]);
}

#[tokio::test]
async fn empty_directory_is_a_successful_run() {
    let dir = TempDir::new().unwrap();
    let scanner = Scanner::new("cer", 4);

    let outcome = scanner.scan(dir.path(), None).await.unwrap();

    assert_eq!(outcome.files_scanned, 0);
    assert!(outcome.records.is_empty());
    assert_eq!(outcome.failures, 0);
}

#[tokio::test]
async fn missing_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let scanner = Scanner::new("cer", 4);

    let err = scanner.scan(&missing, None).await.unwrap_err();
    assert!(matches!(err, ScanError::MissingDirectory { .. }));
}

#[tokio::test]
async fn extension_filter_is_case_insensitive_and_exclusive() {
    let dir = TempDir::new().unwrap();
    mint_cert(dir.path(), "lower.cer", "lower.example.com", Duration::days(30));
    mint_cert(dir.path(), "upper.CER", "upper.example.com", Duration::days(30));
    mint_cert(dir.path(), "ignored.pem", "ignored.example.com", Duration::days(30));
    std::fs::write(dir.path().join("notes.txt"), b"not a cert").unwrap();

    let scanner = Scanner::new("cer", 4);
    let outcome = scanner.scan(dir.path(), None).await.unwrap();

    assert_eq!(outcome.files_scanned, 2);
    assert_eq!(outcome.failures, 0);

    let mut names: Vec<&str> = outcome
        .records
        .iter()
        .map(|r| r.file_name.as_str())
        .collect();
    names.sort();
    assert_eq!(names, ["lower.cer", "upper.CER"]);
}

#[tokio::test]
async fn sequential_and_parallel_drivers_agree() {
    let dir = TempDir::new().unwrap();
    for i in 0..6 {
        // Offsets keep each cert well inside its expiry band for the
        // duration of the test.
        let days = Duration::days(10 + i * 17) + Duration::hours(12);
        mint_cert(
            dir.path(),
            &format!("host{i}.cer"),
            &format!("host{i}.example.com"),
            days,
        );
    }
    std::fs::write(dir.path().join("broken.cer"), b"garbage").unwrap();

    let sequential = Scanner::new("cer", 1)
        .scan(dir.path(), None)
        .await
        .unwrap();
    let parallel = Scanner::new("cer", 10)
        .scan(dir.path(), None)
        .await
        .unwrap();

    assert_eq!(sequential.files_scanned, parallel.files_scanned);
    assert_eq!(sequential.failures, parallel.failures);
    assert_eq!(sequential.records.len(), parallel.records.len());

    let key = |r: &certwatch::models::CertificateRecord| {
        (
            r.file_name.clone(),
            r.thumbprint.clone(),
            r.domain.clone(),
            r.days_left,
            r.status.to_string(),
        )
    };
    let mut seq_keys: Vec<_> = sequential.records.iter().map(key).collect();
    let mut par_keys: Vec<_> = parallel.records.iter().map(key).collect();
    seq_keys.sort();
    par_keys.sort();
    assert_eq!(seq_keys, par_keys);
}

#[tokio::test]
async fn every_record_status_matches_its_days_left() {
    let dir = TempDir::new().unwrap();
    for (name, valid_for) in [
        ("e.cer", Duration::days(-10)),
        ("c.cer", Duration::hours(36)),
        ("w.cer", Duration::days(4) + Duration::hours(12)),
        ("n.cer", Duration::days(15) + Duration::hours(12)),
        ("v.cer", Duration::days(200)),
    ] {
        mint_cert(dir.path(), name, "band.example.com", valid_for);
    }

    let scanner = Scanner::new("cer", 4);
    let outcome = scanner.scan(dir.path(), None).await.unwrap();

    assert_eq!(outcome.records.len(), 5);
    for record in &outcome.records {
        assert_eq!(
            record.status,
            classify(record.days_left),
            "mismatch in {}",
            record.file_name
        );
    }
}
