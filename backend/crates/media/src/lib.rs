//! Media Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - entities, value objects, repository traits
//! - `application/` - use cases, ports and configuration
//!
//! HTTP handlers, persistence mappings and service adapters live outside
//! this crate: they implement the repository/port traits, construct domain
//! objects only through their validated constructors, and read validated
//! fields back out for transport and storage.

pub mod application;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::config::MediaConfig;
pub use error::{MediaError, MediaResult};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::user::*;
    pub use crate::domain::entity::video::*;
    pub use crate::domain::value_object::video_status::*;
}
