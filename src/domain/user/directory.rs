//! Identity resolution trait

use async_trait::async_trait;
use std::fmt::Debug;

#[cfg(test)]
use mockall::automock;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Host-owned directory that resolves caller identifiers to user records
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync + Debug {
    /// Get a user by their ID
    async fn get_user_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;
}
