//! Sending generated certificates to participants.
//!
//! No transport is provided; the surrounding application plugs one in by
//! implementing [`CertificateMailer`].

use crate::certificate::Locale;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("certificate file not found: {}", .0.display())]
    MissingAttachment(PathBuf),

    #[error("could not send to {recipient}: {reason}")]
    Transport { recipient: String, reason: String },
}

/// One certificate addressed to one participant
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateEmail {
    pub recipient_email: String,
    pub recipient_name: String,
    pub event_name: String,
    pub certificate_path: PathBuf,
    pub locale: Locale,
}

impl CertificateEmail {
    pub fn subject(&self) -> String {
        match self.locale {
            Locale::Pt => format!("Certificado de Participação - {}", self.event_name),
            Locale::En => format!("Certificate of Participation - {}", self.event_name),
        }
    }

    /// Plain-text body; `sender` signs it off
    pub fn body(&self, sender: &str) -> String {
        match self.locale {
            Locale::Pt => format!(
                "Olá {name},\n\n\
                 Segue em anexo o seu certificado de participação no evento \"{event}\".\n\n\
                 Agradecemos a sua presença e participação!\n\n\
                 Atenciosamente,\n{sender}\n\n\
                 ---\n\
                 Este é um email automático. Por favor não responda.",
                name = self.recipient_name,
                event = self.event_name,
            ),
            Locale::En => format!(
                "Hello {name},\n\n\
                 Please find attached your certificate of participation in \"{event}\".\n\n\
                 Thank you for attending!\n\n\
                 Kind regards,\n{sender}\n\n\
                 ---\n\
                 This is an automated message. Please do not reply.",
                name = self.recipient_name,
                event = self.event_name,
            ),
        }
    }

    /// File name the PDF is attached under
    pub fn attachment_name(&self) -> String {
        match self.locale {
            Locale::Pt => format!("Certificado_{}.pdf", self.recipient_name),
            Locale::En => format!("Certificate_{}.pdf", self.recipient_name),
        }
    }
}

pub trait CertificateMailer {
    /// Deliver one message. The attachment is known to exist when this is called.
    fn send(&mut self, email: &CertificateEmail) -> Result<(), DeliveryError>;
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct BulkSendSummary {
    pub sent: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

/// Send every message, carrying on past failures
pub fn send_bulk<M>(mailer: &mut M, emails: &[CertificateEmail]) -> BulkSendSummary
where
    M: CertificateMailer + ?Sized,
{
    let mut summary = BulkSendSummary::default();

    for email in emails.iter() {
        let outcome = if email.certificate_path.exists() {
            mailer.send(email)
        } else {
            Err(DeliveryError::MissingAttachment(email.certificate_path.clone()))
        };

        match outcome {
            Ok(()) => {
                log::info!("Certificate sent to {}", email.recipient_email);
                summary.sent += 1;
            }
            Err(e) => {
                log::error!("Failed to send certificate to {}: {e}", email.recipient_email);
                summary.failed += 1;
                summary.errors.push(format!("{}: {e}", email.recipient_email));
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Outbox {
        delivered: Vec<String>,
        reject: Option<String>,
    }

    impl CertificateMailer for Outbox {
        fn send(&mut self, email: &CertificateEmail) -> Result<(), DeliveryError> {
            if self.reject.as_deref() == Some(email.recipient_email.as_str()) {
                return Err(DeliveryError::Transport {
                    recipient: email.recipient_email.clone(),
                    reason: "mailbox full".to_string(),
                });
            }
            self.delivered.push(email.recipient_email.clone());
            Ok(())
        }
    }

    fn email(address: &str, path: PathBuf) -> CertificateEmail {
        CertificateEmail {
            recipient_email: address.to_string(),
            recipient_name: "Maria".to_string(),
            event_name: "Yoga".to_string(),
            certificate_path: path,
            locale: Locale::Pt,
        }
    }

    #[test]
    fn wording_follows_the_locale() {
        let pt = email("maria@example.org", PathBuf::from("c.pdf"));
        assert_eq!(pt.subject(), "Certificado de Participação - Yoga");
        assert_eq!(pt.attachment_name(), "Certificado_Maria.pdf");
        assert!(pt.body("Ana Rita").starts_with("Olá Maria,"));

        let en = CertificateEmail {
            locale: Locale::En,
            ..pt
        };
        assert_eq!(en.subject(), "Certificate of Participation - Yoga");
        assert!(en.body("Ana Rita").contains("\"Yoga\""));
    }

    #[test]
    fn bulk_sends_carry_on_after_failures() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let pdf = dir.path().join("c.pdf");
        std::fs::write(&pdf, b"%PDF-").expect("can write");

        let mut outbox = Outbox {
            reject: Some("rui@example.org".to_string()),
            ..Outbox::default()
        };
        let summary = send_bulk(
            &mut outbox,
            &[
                email("maria@example.org", pdf.clone()),
                email("rui@example.org", pdf.clone()),
                email("ana@example.org", dir.path().join("missing.pdf")),
                email("joao@example.org", pdf),
            ],
        );

        assert_eq!(summary.sent, 2);
        assert_eq!(summary.failed, 2);
        assert_eq!(outbox.delivered, vec!["maria@example.org", "joao@example.org"]);
        assert!(summary.errors[1].starts_with("ana@example.org: certificate file not found"));
    }
}
