//! Register User Use Case
//!
//! Creates a new user account: validates the address, refuses duplicate
//! registrations, applies the password policy and hands the hashed
//! credentials to the user aggregate.

use std::sync::Arc;

use kernel::domain::entity::Entity;
use kernel::value_object::email_address::EmailAddress;

use crate::application::config::MediaConfig;
use crate::application::ports::PasswordHasher;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{MediaError, MediaResult};

/// Registration input
pub struct RegisterUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Registration output
#[derive(Debug)]
pub struct RegisterUserOutput {
    /// External id of the created user
    pub id: String,
}

/// Register user use case
pub struct RegisterUserUseCase<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    user_repo: Arc<R>,
    password_hasher: Arc<H>,
    config: Arc<MediaConfig>,
}

impl<R, H> RegisterUserUseCase<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    pub fn new(user_repo: Arc<R>, password_hasher: Arc<H>, config: Arc<MediaConfig>) -> Self {
        Self {
            user_repo,
            password_hasher,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterUserInput) -> MediaResult<RegisterUserOutput> {
        let email = EmailAddress::new(input.email)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(MediaError::EmailAlreadyRegistered {
                email: email.to_string(),
            });
        }

        if input.password.chars().count() < self.config.password_min_length {
            return Err(MediaError::PasswordValidation(format!(
                "must be at least {} characters",
                self.config.password_min_length
            )));
        }

        let hashed_password = self.password_hasher.hash(&input.password)?;
        let user = User::new(input.username, email, hashed_password)?;
        let user = self.user_repo.insert(user).await?;

        tracing::info!(
            external_id = %user.external_id(),
            username = %user.username,
            "User registered"
        );

        Ok(RegisterUserOutput {
            id: user.external_id().to_string(),
        })
    }
}
