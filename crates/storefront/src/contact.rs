//! The contact form.
//!
//! Submitting is a no-op behind a simulated round trip; only validation
//! can fail.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::cli::ContactArgs;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required (pass --{0})")]
    MissingField(Field),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Checks required fields in form order, then the email shape.
    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.value(*f).trim().is_empty())
        {
            return Err(ContactError::MissingField(field));
        }
        if !self.email.contains('@') {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

impl From<ContactArgs> for ContactForm {
    fn from(args: ContactArgs) -> Self {
        Self {
            name: args.name.unwrap_or_default(),
            email: args.email.unwrap_or_default(),
            subject: args.subject.unwrap_or_default(),
            message: args.message.unwrap_or_default(),
        }
    }
}

/// Validates and "sends" the form after `delay`.
pub async fn submit(form: &ContactForm, delay: Duration) -> Result<&'static str, ContactError> {
    form.validate()?;
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    info!(subject = %form.subject, "contact message submitted");
    Ok(SUCCESS_MESSAGE)
}
