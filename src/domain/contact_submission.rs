//! src/domain/contact_submission.rs

/// Why a contact-form payload was rejected. The two cases map to distinct
/// caller-facing messages, so absent keys and blank values stay
/// distinguishable in the response.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("All fields are required")]
    EmptyFields,
}

/// One validated contact-form payload, ready to become an email.
///
/// Transient by design: constructed from a request body, turned into a single
/// outbound message, then dropped. Never persisted.
#[derive(Debug)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    /// All three fields are required and must be non-empty once leading and
    /// trailing whitespace is stripped. The email address is not checked for
    /// format, only for presence.
    pub fn parse(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Result<ContactSubmission, SubmissionError> {
        let (name, email, message) = match (name, email, message) {
            (Some(name), Some(email), Some(message)) => (name, email, message),
            _ => return Err(SubmissionError::MissingFields),
        };

        let name = name.trim().to_owned();
        let email = email.trim().to_owned();
        let message = message.trim().to_owned();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(SubmissionError::EmptyFields);
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use claim::assert_ok;

    use super::{ContactSubmission, SubmissionError};

    fn full(name: &str, email: &str, message: &str) -> Result<ContactSubmission, SubmissionError> {
        ContactSubmission::parse(
            Some(name.to_string()),
            Some(email.to_string()),
            Some(message.to_string()),
        )
    }

    #[test]
    fn a_complete_payload_is_parsed_successfully() {
        assert_ok!(full("Alice", "a@example.com", "Hi"));
    }

    #[test]
    fn a_missing_key_is_rejected_as_missing_fields() {
        let result = ContactSubmission::parse(
            Some("Alice".into()),
            None,
            Some("Hi".into()),
        );
        assert_eq!(result.unwrap_err(), SubmissionError::MissingFields);
    }

    #[test]
    fn all_keys_missing_is_rejected_as_missing_fields() {
        let result = ContactSubmission::parse(None, None, None);
        assert_eq!(result.unwrap_err(), SubmissionError::MissingFields);
    }

    #[test]
    fn whitespace_only_values_are_rejected_as_empty_fields() {
        let result = full("Alice", "   ", "Hi");
        assert_eq!(result.unwrap_err(), SubmissionError::EmptyFields);
    }

    #[test]
    fn empty_strings_are_rejected_as_empty_fields() {
        let result = full("", "", "");
        assert_eq!(result.unwrap_err(), SubmissionError::EmptyFields);
    }

    #[test]
    fn values_are_trimmed() {
        let submission = full("  Alice  ", " a@example.com ", "\nHi\n").unwrap();
        assert_eq!(submission.name(), "Alice");
        assert_eq!(submission.email(), "a@example.com");
        assert_eq!(submission.message(), "Hi");
    }

    #[test]
    fn the_email_format_is_not_validated() {
        // Presence is the only requirement; format checks are out of scope.
        assert_ok!(full("Alice", "definitely-not-an-email", "Hi"));
    }
}
