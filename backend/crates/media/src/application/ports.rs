//! Application Ports
//!
//! Contracts for the external services the use cases depend on. Adapters
//! (password hashing backends, mail delivery, object storage) implement
//! these outside this crate.

use crate::error::MediaResult;
use kernel::value_object::email::Email;

/// Password hashing service
pub trait PasswordHasher {
    /// Hash a plain text password
    fn hash(&self, password: &str) -> MediaResult<String>;

    /// Verify a plain text password against a stored hash
    fn verify(&self, password: &str, hashed_password: &str) -> bool;
}

/// Outgoing email delivery
#[trait_variant::make(EmailSender: Send)]
pub trait LocalEmailSender {
    /// Send a single email
    async fn send_email(&self, email: &Email) -> MediaResult<()>;

    /// Send multiple emails
    async fn send_bulk_emails(&self, emails: &[Email]) -> MediaResult<()>;
}

/// Object storage for uploaded and processed files
#[trait_variant::make(FileStorage: Send)]
pub trait LocalFileStorage {
    /// Upload a file
    async fn upload_file(&self, file_name: &str, file_data: &[u8]) -> MediaResult<()>;

    /// Download a file
    async fn download_file(&self, file_name: &str) -> MediaResult<Vec<u8>>;
}
