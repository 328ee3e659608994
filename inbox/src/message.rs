//! Submitted contact messages and the validation that gates them.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `local@domain.tld`: no whitespace or `@` in either part, and at least one
/// `.` inside the domain with text on both sides. U+FEFF counts as
/// whitespace, as it does for browser form handling.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern is valid")
});

/// Reason a submission was rejected. The `Display` text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Name, email, or body was empty after trimming.
    #[error("Please fill in all fields.")]
    MissingField,
    /// Email did not match `local@domain.tld`.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Raw form values as read from the inputs at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub body: String,
}

impl FormFields {
    pub fn new(name: impl Into<String>, email: impl Into<String>, body: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), body: body.into() }
    }
}

/// A contact entry as stored in the message log.
///
/// Serialized keys are `name`, `email`, `message` and `date` so logs written
/// by earlier versions of the page stay readable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub name: String,
    pub email: String,
    #[serde(rename = "message")]
    pub body: String,
    /// Locale-formatted local time captured when the form was submitted.
    #[serde(rename = "date")]
    pub submitted_at: String,
}

impl Message {
    /// Validate raw form fields and build a message stamped `submitted_at`.
    ///
    /// Checks run in order and the first failure wins: any empty field is
    /// [`ValidationError::MissingField`], then a malformed email is
    /// [`ValidationError::InvalidEmail`].
    pub fn from_fields(fields: &FormFields, submitted_at: impl Into<String>) -> Result<Self, ValidationError> {
        let name = trim_form_value(&fields.name);
        let email = trim_form_value(&fields.email);
        let body = trim_form_value(&fields.body);

        if name.is_empty() || email.is_empty() || body.is_empty() {
            return Err(ValidationError::MissingField);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            body: body.to_owned(),
            submitted_at: submitted_at.into(),
        })
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Trim the way browsers trim form input: Unicode whitespace plus the
/// zero-width no-break space (U+FEFF).
#[must_use]
pub fn trim_form_value(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}
