use std::fmt::Formatter;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use tracing;

use crate::domain::contact_submission::{ContactSubmission, SubmissionError};
use crate::domain::site::ContactRecipient;
use crate::mail::{MailError, MailTransport, OutgoingEmail};
use crate::utils::error_helpers::error_chain_fmt;

/// The body of every `/send_message` response, success or failure.
#[derive(serde::Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

/// Raw request body. Every key is optional so that an absent key and a blank
/// value can be told apart during validation.
#[derive(serde::Deserialize)]
pub struct ContactForm {
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = SubmissionError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        ContactSubmission::parse(form.name, form.email, form.message)
    }
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    Validation(#[from] SubmissionError),

    // The cause lands in the logs; the caller only sees the generic message.
    #[error("Failed to send message. Please try again later.")]
    Delivery(#[source] MailError),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) => StatusCode::BAD_REQUEST,
            ContactError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse {
            success: false,
            message: self.to_string(),
        })
    }
}

#[tracing::instrument(
    name = "Relaying a contact form submission",
    skip(form, mailer, recipient)
)]
pub async fn send_message(
    form: web::Json<ContactForm>,
    mailer: web::Data<dyn MailTransport>,
    recipient: web::Data<ContactRecipient>,
) -> Result<HttpResponse, ContactError> {
    let submission: ContactSubmission = form.into_inner().try_into()?;

    let email = OutgoingEmail {
        to: recipient.0.clone(),
        subject: format!("New Portfolio Message from {}", submission.name()),
        body: format!(
            "From: {}\nEmail: {}\n\nMessage:\n{}",
            submission.name(),
            submission.email(),
            submission.message(),
        ),
    };

    // One attempt only. A failed relay is reported, never retried.
    mailer.send(&email).await.map_err(|e| {
        tracing::error!("Error sending contact message: {:?}", e);
        ContactError::Delivery(e)
    })?;

    Ok(HttpResponse::Ok().json(ApiResponse {
        success: true,
        message: "Thank you for your message! I'll get back to you soon.".into(),
    }))
}
