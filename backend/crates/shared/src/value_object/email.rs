//! Email Value Object
//!
//! An email message: subject, body, recipients and sender. The addresses are
//! already-validated [`EmailAddress`] values; the message itself only
//! requires at least one recipient. Uses the default error builder, so a
//! failing construction surfaces the base [`DomainValidationError`].

use std::fmt;

use serde::Serialize;

use crate::domain::value_object::ValueObject;
use crate::validation::error::DomainValidationError;
use crate::validation::result::ValidationResult;
use crate::validation::rules;
use crate::validation::validator::Validator;
use crate::value_object::email_address::EmailAddress;

/// Rule set for email message candidates.
pub struct EmailValidator;

impl Validator for EmailValidator {
    type Candidate = Email;

    fn validate(&self, candidate: &Email) -> ValidationResult {
        let mut result = ValidationResult::valid();
        result.check(rules::min_items(&candidate.to_addresses, "to_addresses", 1));
        result
    }
}

/// A Value Object representing an email message with subject, body,
/// recipients and sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    subject: String,
    body: String,
    to_addresses: Vec<EmailAddress>,
    from_address: EmailAddress,
}

impl Email {
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        to_addresses: Vec<EmailAddress>,
        from_address: EmailAddress,
    ) -> Result<Self, DomainValidationError> {
        Self {
            subject: subject.into(),
            body: body.into(),
            to_addresses,
            from_address,
        }
        .validated()
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn to_addresses(&self) -> &[EmailAddress] {
        &self.to_addresses
    }

    pub fn from_address(&self) -> &EmailAddress {
        &self.from_address
    }
}

impl ValueObject for Email {
    type Error = DomainValidationError;

    fn validate(&self) -> ValidationResult {
        EmailValidator.validate(self)
    }
}

impl fmt::Display for Email {
    /// Canonical field-keyed representation, for diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
