//! Outbound mail: a small trait seam over SMTP delivery.
//!
//! Handlers talk to `dyn MailTransport` so the HTTP layer can be exercised
//! without a live relay; `SmtpMailer` is the production implementation.

pub mod smtp;

pub use smtp::SmtpMailer;

/// One plain-text message ready for dispatch.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

#[async_trait::async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}
