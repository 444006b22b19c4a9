//! Email Address Value Object
//!
//! Represents a validated email address. Basic format validation only;
//! whether the mailbox exists is a concern for delivery, not construction.
//! Input is trimmed and lowercased before validation, so two spellings of
//! the same address compare equal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_object::ValueObject;
use crate::validation::error::{DomainValidationError, ValidationFailure};
use crate::validation::result::{ValidationErrorDetails, ValidationResult};
use crate::validation::rules;
use crate::validation::validator::Validator;

/// Maximum address length (per RFC 5321)
const ADDRESS_MAX_LENGTH: usize = 254;

/// Maximum length of the part before the `@`
const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Error raised when an email address is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid email address")]
pub struct InvalidEmailAddressError {
    /// The offending raw address, when known.
    pub address: Option<String>,
    errors: Vec<ValidationErrorDetails>,
}

impl ValidationFailure for InvalidEmailAddressError {
    fn message(&self) -> &str {
        "Invalid email address"
    }

    fn details(&self) -> &[ValidationErrorDetails] {
        &self.errors
    }
}

impl From<DomainValidationError> for InvalidEmailAddressError {
    fn from(error: DomainValidationError) -> Self {
        Self {
            address: None,
            errors: error.into_errors(),
        }
    }
}

impl From<InvalidEmailAddressError> for DomainValidationError {
    fn from(error: InvalidEmailAddressError) -> Self {
        DomainValidationError::new(error.errors).with_message("Invalid email address")
    }
}

/// Rule set for email address candidates.
pub struct EmailAddressValidator;

impl Validator for EmailAddressValidator {
    type Candidate = str;

    fn validate(&self, candidate: &str) -> ValidationResult {
        let mut result = ValidationResult::valid();
        if let Some(error) = rules::non_empty(candidate, "address") {
            result.push(error);
            return result;
        }
        result.check(rules::max_length(candidate, "address", ADDRESS_MAX_LENGTH));
        if !is_valid_format(candidate) {
            result.push(ValidationErrorDetails::field(
                "address",
                "The address must be a valid email address.",
            ));
        }
        result
    }
}

/// Basic email format validation
fn is_valid_format(address: &str) -> bool {
    // Must contain exactly one @
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    // Local part checks
    if local.is_empty() || local.len() > LOCAL_PART_MAX_LENGTH {
        return false;
    }

    // Domain checks
    if domain.is_empty() || !domain.contains('.') {
        return false;
    }
    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }

    // Domain shouldn't start or end with dot or hyphen
    if domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    if domain.starts_with('-') || domain.ends_with('-') {
        return false;
    }

    true
}

/// A Value Object that represents an email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new address: normalize (trim, lowercase), then validate.
    pub fn new(address: impl Into<String>) -> Result<Self, InvalidEmailAddressError> {
        Self(address.into().trim().to_lowercase()).validated()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// The part after the `@`.
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or("")
    }

    /// The part before the `@`.
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or("")
    }
}

impl ValueObject for EmailAddress {
    type Error = InvalidEmailAddressError;

    fn validate(&self) -> ValidationResult {
        EmailAddressValidator.validate(&self.0)
    }

    fn build_error(&self, result: ValidationResult) -> Self::Error {
        InvalidEmailAddressError {
            address: Some(self.0.clone()),
            errors: result.into_errors(),
        }
    }
}

impl FromStr for EmailAddress {
    type Err = InvalidEmailAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmailAddress::new(s)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = InvalidEmailAddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EmailAddress::new(value)
    }
}

impl From<EmailAddress> for String {
    fn from(address: EmailAddress) -> Self {
        address.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(EmailAddress::new("user@example.com").is_ok());
        assert!(EmailAddress::new("user.name@example.co.jp").is_ok());
        assert!(EmailAddress::new("user+tag@example.com").is_ok());
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(EmailAddress::new("userexample.com").is_err());
        assert!(EmailAddress::new("user@").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("user@@example.com").is_err());
        assert!(EmailAddress::new("user@example").is_err());
        assert!(EmailAddress::new("user@.example.com").is_err());
        assert!(EmailAddress::new("user@example.com-").is_err());
    }

    #[test]
    fn test_empty_address_references_address_field() {
        let error = EmailAddress::new("").unwrap_err();
        assert_eq!(error.address.as_deref(), Some(""));
        assert_eq!(error.details().len(), 1);
        assert_eq!(error.details()[0].path(), "address");
    }

    #[test]
    fn test_error_is_the_specialized_type() {
        let error: InvalidEmailAddressError = EmailAddress::new("nope").unwrap_err();
        assert_eq!(error.address.as_deref(), Some("nope"));
    }

    #[test]
    fn test_normalization() {
        let address = EmailAddress::new("  User@Example.COM  ").unwrap();
        assert_eq!(address.as_str(), "user@example.com");
    }

    #[test]
    fn test_equality_after_normalization() {
        assert_eq!(
            EmailAddress::new("User@Example.COM").unwrap(),
            EmailAddress::new("user@example.com").unwrap()
        );
    }

    #[test]
    fn test_domain_and_local_part() {
        let address = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(address.domain(), "example.com");
        assert_eq!(address.local_part(), "user");
    }

    #[test]
    fn test_too_long_address() {
        let address = format!("{}@example.com", "a".repeat(ADDRESS_MAX_LENGTH));
        let error = EmailAddress::new(address).unwrap_err();
        assert!(!error.details().is_empty());
    }

    #[test]
    fn test_display_is_bare_value() {
        let address = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(address.to_string(), "user@example.com");
    }

    #[test]
    fn test_serde_canonical_string() {
        let address = EmailAddress::new("user@example.com").unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, "\"user@example.com\"");

        let back: EmailAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
    }

    #[test]
    fn test_deserialize_revalidates() {
        let result: Result<EmailAddress, _> = serde_json::from_str("\"not-an-email\"");
        assert!(result.is_err());
    }
}
