//! Email summary notification
//!
//! Sends a short plain-text summary of the run with both report artifacts
//! attached. Delivery failure is a collaborator concern: the caller logs it
//! and the run still succeeds, with the artifacts already on disk.

use crate::config::EmailSettings;
use crate::models::ReportSummary;
use crate::utils::NotifyError;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::path::Path;

/// SMTP notifier for run summaries
pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    to: Vec<String>,
}

impl EmailNotifier {
    /// Build a notifier from email settings
    pub fn from_settings(settings: &EmailSettings) -> Result<Self, NotifyError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.smtp_host)
            .map_err(|e| NotifyError::Transport {
                message: e.to_string(),
            })?
            .port(settings.smtp_port);

        if let (Some(user), Some(pass)) = (&settings.username, &settings.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from: settings.from.clone(),
            to: settings.to.clone(),
        })
    }

    /// Plain-text message body for a run summary.
    ///
    /// The critical line counts `Critical` status only; expired certificates
    /// are reported on their own line.
    pub fn format_body(summary: &ReportSummary) -> String {
        format!(
            "Certificate expiry report\n\n\
             Certificates checked: {total}\n\
             Valid: {valid}\n\
             Expiring soon: {expiring}\n\
             Critical: {critical}\n\
             Expired: {expired}\n\n\
             The CSV and HTML reports are attached.",
            total = summary.total,
            valid = summary.valid,
            expiring = summary.expiring_soon,
            critical = summary.critical,
            expired = summary.expired,
        )
    }

    /// Send the summary with the given report files attached.
    ///
    /// Attachments that no longer exist on disk fail the send; report files
    /// already written are never touched.
    pub async fn send_summary(
        &self,
        summary: &ReportSummary,
        attachments: &[&Path],
    ) -> Result<(), NotifyError> {
        let mut body = MultiPart::mixed().singlepart(SinglePart::plain(Self::format_body(summary)));

        for path in attachments {
            let bytes = std::fs::read(path).map_err(|e| NotifyError::Attachment {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "report".to_string());

            let mime = if filename.ends_with(".html") {
                "text/html; charset=utf-8"
            } else {
                "text/csv; charset=utf-8"
            };
            let content_type = ContentType::parse(mime).map_err(|e| NotifyError::Message {
                message: e.to_string(),
            })?;

            body = body.singlepart(Attachment::new(filename).body(bytes, content_type));
        }

        let from: Mailbox = self.from.parse().map_err(|e: lettre::address::AddressError| {
            NotifyError::Message {
                message: format!("invalid from address: {}", e),
            }
        })?;

        let mut builder = Message::builder().from(from).subject(format!(
            "Certificate expiry report: {} critical, {} expiring soon",
            summary.critical, summary.expiring_soon
        ));

        for recipient in &self.to {
            let to: Mailbox =
                recipient
                    .parse()
                    .map_err(|e: lettre::address::AddressError| NotifyError::Message {
                        message: format!("invalid recipient {}: {}", recipient, e),
                    })?;
            builder = builder.to(to);
        }

        let message = builder.multipart(body).map_err(|e| NotifyError::Message {
            message: e.to_string(),
        })?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotifyError::Transport {
                message: e.to_string(),
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_reports_critical_separately_from_expired() {
        let summary = ReportSummary {
            total: 10,
            valid: 5,
            expiring_soon: 2,
            critical: 1,
            expired: 2,
        };
        let body = EmailNotifier::format_body(&summary);
        assert!(body.contains("Certificates checked: 10"));
        assert!(body.contains("Critical: 1"));
        assert!(body.contains("Expired: 2"));
    }
}
