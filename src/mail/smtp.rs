//! src/mail/smtp.rs

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

use crate::config::MailSettings;

use super::{MailError, MailTransport, OutgoingEmail};

// The relay is part of the deployment contract, not of the configuration
// surface: STARTTLS against Gmail's submission port.
const SMTP_RELAY: &str = "smtp.gmail.com";
const SMTP_PORT: u16 = 587;

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &MailSettings) -> Result<Self, MailError> {
        let sender = settings
            .sender
            .parse::<Mailbox>()
            .map_err(|e| MailError::InvalidAddress(format!("{}: {}", settings.sender, e)))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(SMTP_RELAY)
            .map_err(|e| MailError::Smtp(e.to_string()))?
            .port(SMTP_PORT)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.expose_secret().clone(),
            ))
            .build();

        Ok(Self { transport, sender })
    }
}

#[async_trait::async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let message = build_message(&self.sender, email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(())
    }
}

/// Assembles the lettre message for one outgoing email.
pub fn build_message(sender: &Mailbox, email: &OutgoingEmail) -> Result<Message, MailError> {
    let recipient = email
        .to
        .parse::<Mailbox>()
        .map_err(|e| MailError::InvalidAddress(format!("{}: {}", email.to, e)))?;

    Message::builder()
        .from(sender.clone())
        .to(recipient)
        .subject(email.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}
