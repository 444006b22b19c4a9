//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in an
//! infrastructure layer outside this crate, and may only produce entities
//! through their validated constructors, never by assembling raw field
//! values around the domain.

use crate::domain::entity::{user::User, video::Video};
use crate::error::MediaResult;
use kernel::value_object::email_address::EmailAddress;
use kernel::value_object::external_entity_id::ExternalEntityId;
use kernel::value_object::unique_entity_id::UniqueEntityId;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user, returning the stored entity with its assigned id.
    async fn insert(&self, user: User) -> MediaResult<User>;

    /// Find a user by internal id
    async fn find_by_id(&self, id: &UniqueEntityId) -> MediaResult<Option<User>>;

    /// Find a user by external id
    async fn find_by_external_id(&self, id: &ExternalEntityId) -> MediaResult<Option<User>>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &EmailAddress) -> MediaResult<Option<User>>;
}

/// Video repository trait
#[trait_variant::make(VideoRepository: Send)]
pub trait LocalVideoRepository {
    /// Insert a new video, returning the stored entity with its assigned id.
    async fn insert(&self, video: Video) -> MediaResult<Video>;

    /// Find a video by internal id
    async fn find_by_id(&self, id: &UniqueEntityId) -> MediaResult<Option<Video>>;
}
