//! Report rendering integration tests
//!
//! Covers the CSV column contract under hostile field values, HTML
//! auto-escaping of the embedded detail payload, and render stability.

use certwatch::models::{classify, CertStatus, CertificateRecord, ReportSummary};
use certwatch::report::csv::{render_csv, CSV_COLUMNS};
use certwatch::report::HtmlReport;
use chrono::{TimeZone, Utc};

fn record(file_name: &str, domain: &str, days_left: i64) -> CertificateRecord {
    let checked = Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap();
    CertificateRecord {
        file_name: file_name.to_string(),
        domain: domain.to_string(),
        subject_raw: format!("CN={domain}, O=Example Inc, C=GB"),
        issuer_raw: "CN=Example CA, O=Example Inc".to_string(),
        issuer_name: "Example CA".to_string(),
        not_before: checked - chrono::Duration::days(365),
        not_after: checked + chrono::Duration::days(days_left),
        thumbprint: "0123456789ABCDEF0123456789ABCDEF01234567".to_string(),
        serial_number: "0A:1B:2C".to_string(),
        days_left,
        status: classify(days_left),
        last_checked: checked,
        country: "GB".to_string(),
        organization: "Example Inc".to_string(),
        org_unit: "IT".to_string(),
        locality: "London".to_string(),
        state: String::new(),
        key_usage: "Digital Signature".to_string(),
        enhanced_key_usage: "Server Authentication".to_string(),
        subject_alt_names: domain.to_string(),
    }
}

/// Reverse the HTML entity escaping applied to attribute values.
fn html_unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

/// Pull the escaped `data-details` attribute value out of rendered HTML.
fn detail_payloads(html: &str) -> Vec<String> {
    let marker = "data-details=\"";
    let mut payloads = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(marker) {
        let tail = &rest[start + marker.len()..];
        let end = tail.find('"').unwrap();
        payloads.push(tail[..end].to_string());
        rest = &tail[end..];
    }
    payloads
}

#[test]
fn csv_round_trips_hostile_field_values() {
    let mut hostile = record("tricky.cer", "tricky.example.com", 45);
    hostile.organization = "Comma, \"Quotes\" & Co".to_string();
    hostile.issuer_name = "Zertifizierungsstelle Müller".to_string();
    hostile.subject_alt_names = "a.example.com, b.example.com".to_string();

    let bytes = render_csv(&[hostile.clone()]).unwrap();

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), CSV_COLUMNS.len());
    for (got, want) in headers.iter().zip(CSV_COLUMNS) {
        assert_eq!(got, want);
    }

    let row = reader.records().next().unwrap().unwrap();
    assert_eq!(&row[0], "tricky.cer");
    assert_eq!(&row[2], "Zertifizierungsstelle Müller");
    assert_eq!(&row[6], "Valid");
    assert_eq!(&row[10], "Comma, \"Quotes\" & Co");
    assert_eq!(&row[16], "a.example.com, b.example.com");
}

#[test]
fn csv_rows_keep_input_order() {
    let records = vec![
        record("z.cer", "z.example.com", 100),
        record("a.cer", "a.example.com", 1),
    ];
    let bytes = render_csv(&records).unwrap();
    let text = String::from_utf8(bytes).unwrap();

    let z_pos = text.find("z.cer").unwrap();
    let a_pos = text.find("a.cer").unwrap();
    assert!(z_pos < a_pos);
}

#[test]
fn html_render_is_byte_stable_for_fixed_inputs() {
    let records = vec![
        record("b.cer", "b.example.com", 5),
        record("a.cer", "a.example.com", 90),
        record("c.cer", "c.example.com", -3),
    ];
    let summary = ReportSummary::from_records(&records);
    let generated_at = Utc.with_ymd_and_hms(2026, 8, 23, 12, 0, 0).unwrap();

    let first = HtmlReport::render_at(&records, &summary, generated_at).unwrap();
    let mut shuffled = records.clone();
    shuffled.reverse();
    let second = HtmlReport::render_at(&shuffled, &summary, generated_at).unwrap();

    assert_eq!(first, second);
}

#[test]
fn html_rows_are_sorted_by_days_left_ascending() {
    let records = vec![
        record("far.cer", "far.example.com", 200),
        record("gone.cer", "gone.example.com", -10),
        record("soon.cer", "soon.example.com", 5),
    ];
    let summary = ReportSummary::from_records(&records);
    let html = HtmlReport::render(&records, &summary).unwrap();

    let gone = html.find("gone.example.com").unwrap();
    let soon = html.find("soon.example.com").unwrap();
    let far = html.find("far.example.com").unwrap();
    assert!(gone < soon && soon < far);
}

#[test]
fn hostile_subject_is_escaped_not_injected() {
    let mut hostile = record("evil.cer", "<script>alert('x')</script>", 10);
    hostile.subject_raw = "CN=<script>alert('x')</script>, O=\"Evil\" & Co".to_string();
    let summary = ReportSummary::from_records(std::slice::from_ref(&hostile));

    let html = HtmlReport::render(&[hostile], &summary).unwrap();

    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;alert"));
}

#[test]
fn detail_payload_survives_the_escape_decode_parse_chain() {
    let mut hostile = record("payload.cer", "payload.example.com", 12);
    hostile.organization = "Quote \" Backslash \\ Amp & Less <".to_string();
    hostile.subject_raw = "CN=payload.example.com, O=Quote \" Backslash \\".to_string();
    let summary = ReportSummary::from_records(std::slice::from_ref(&hostile));

    let html = HtmlReport::render(&[hostile.clone()], &summary).unwrap();

    let payloads = detail_payloads(&html);
    assert_eq!(payloads.len(), 1);
    // The browser decodes the attribute entities before JSON.parse runs;
    // html_unescape stands in for that decoding step.
    let decoded = html_unescape(&payloads[0]);
    let value: serde_json::Value = serde_json::from_str(&decoded).unwrap();

    assert_eq!(value["domain"], "payload.example.com");
    assert_eq!(value["organization"], "Quote \" Backslash \\ Amp & Less <");
    assert_eq!(value["days_left"], 12);
    assert_eq!(value["status"], "Notice");
    assert_eq!(value["thumbprint"], hostile.thumbprint);
}

#[test]
fn kpi_tiles_reflect_the_summary_counts() {
    let records = vec![
        record("v1.cer", "v1.example.com", 120),
        record("v2.cer", "v2.example.com", 60),
        record("n.cer", "n.example.com", 20),
        record("w.cer", "w.example.com", 5),
        record("c.cer", "c.example.com", 1),
        record("e.cer", "e.example.com", -4),
    ];
    let summary = ReportSummary::from_records(&records);
    assert_eq!(summary.total, 6);
    assert_eq!(summary.valid, 2);
    assert_eq!(summary.expiring_soon, 2);
    assert_eq!(summary.critical, 1);
    assert_eq!(summary.expired, 1);

    let html = HtmlReport::render(&records, &summary).unwrap();
    assert!(html.contains("<span class=\"kpi-value\">6</span><span class=\"kpi-label\">Certificates</span>"));
    assert!(html.contains("<span class=\"kpi-value\">2</span><span class=\"kpi-label\">Valid</span>"));
    assert!(html.contains("<span class=\"kpi-value\">2</span><span class=\"kpi-label\">Expiring soon</span>"));
    assert!(html.contains("<span class=\"kpi-value\">1</span><span class=\"kpi-label\">Critical</span>"));
}

#[test]
fn one_day_certificate_gets_the_critical_badge() {
    let r = record("soon.cer", "soon.example.com", 1);
    assert_eq!(r.status, CertStatus::Critical);

    let summary = ReportSummary::from_records(std::slice::from_ref(&r));
    let html = HtmlReport::render(std::slice::from_ref(&r), &summary).unwrap();

    assert!(html.contains("data-badge=\"Critical warning\""));
    assert!(html.contains("class=\"badge badge-critical\""));

    let bytes = render_csv(&[r]).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains(",Critical,"));
}

#[test]
fn empty_record_set_renders_the_empty_state() {
    let summary = ReportSummary::default();
    let html = HtmlReport::render(&[], &summary).unwrap();

    assert!(html.contains("No certificates found."));
    assert!(!html.contains("<tr class=\"cert-row\""));
}
