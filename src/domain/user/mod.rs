//! User domain
//!
//! Caller identities and the directory that resolves them.

mod directory;
mod entity;
mod validation;

pub use directory::UserDirectory;
pub use entity::{User, UserId};
pub use validation::{validate_user_id, UserValidationError};

#[cfg(test)]
pub use directory::MockUserDirectory;
