//! Application Configuration
//!
//! Configuration for the media application layer.

use kernel::value_object::email_address::EmailAddress;

/// Minimum accepted password length (NIST: SHALL be at least 8)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Media application configuration
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Minimum password length accepted at registration
    pub password_min_length: usize,
    /// Sender address for outgoing notifications; `None` disables them
    pub sender_address: Option<EmailAddress>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            password_min_length: MIN_PASSWORD_LENGTH,
            sender_address: None,
        }
    }
}

impl MediaConfig {
    /// Enable outgoing notifications from the given address.
    #[must_use]
    pub fn with_sender(mut self, sender_address: EmailAddress) -> Self {
        self.sender_address = Some(sender_address);
        self
    }
}
