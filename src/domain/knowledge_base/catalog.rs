//! Knowledge base catalog trait

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[cfg(test)]
use mockall::automock;

use super::entity::KnowledgeBase;
use crate::domain::error::DomainError;
use crate::domain::user::UserId;

/// Access level a caller must hold on a catalog entry
///
/// The tools only ever list what a caller may read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Read,
}

/// Restricts a catalog listing to entries a user holds a permission on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessFilter {
    pub user_id: UserId,
    pub permission: Permission,
}

impl AccessFilter {
    /// Entries the user may read
    pub fn readable_by(user_id: UserId) -> Self {
        Self {
            user_id,
            permission: Permission::Read,
        }
    }
}

/// Host-owned catalog of knowledge bases
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KnowledgeBaseCatalog: Send + Sync + Debug {
    /// List knowledge bases, optionally restricted by an access filter
    async fn list_knowledge_bases(
        &self,
        filter: Option<AccessFilter>,
    ) -> Result<Vec<KnowledgeBase>, DomainError>;
}
