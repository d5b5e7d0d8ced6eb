//! In-memory knowledge base catalog for development and testing

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::domain::knowledge_base::{AccessFilter, KnowledgeBase, KnowledgeBaseCatalog, Permission};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Who may see a catalog entry
///
/// Owners can always read their own entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessControl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<UserId>,
    /// Readable by every caller
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub readers: HashSet<UserId>,
}

impl AccessControl {
    /// Readable by everyone
    pub fn public() -> Self {
        Self {
            public: true,
            ..Default::default()
        }
    }

    /// Private to its owner
    pub fn owned_by(owner: UserId) -> Self {
        Self {
            owner: Some(owner),
            ..Default::default()
        }
    }

    /// Grant read access
    pub fn with_reader(mut self, user_id: UserId) -> Self {
        self.readers.insert(user_id);
        self
    }

    pub fn allows(&self, user_id: &UserId, permission: Permission) -> bool {
        match permission {
            Permission::Read => {
                self.public
                    || self.owner.as_ref() == Some(user_id)
                    || self.readers.contains(user_id)
            }
        }
    }
}

#[derive(Debug, Clone)]
struct CatalogEntry {
    knowledge_base: KnowledgeBase,
    access: AccessControl,
}

/// In-memory catalog keeping entries in insertion order
#[derive(Debug, Default)]
pub struct InMemoryKnowledgeBaseCatalog {
    entries: Arc<RwLock<Vec<CatalogEntry>>>,
}

impl InMemoryKnowledgeBaseCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any entry with the same ID
    pub async fn insert(&self, knowledge_base: KnowledgeBase, access: AccessControl) {
        let mut entries = self.entries.write().await;
        let entry = CatalogEntry {
            knowledge_base,
            access,
        };

        match entries
            .iter_mut()
            .find(|e| e.knowledge_base.id() == entry.knowledge_base.id())
        {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
    }
}

#[async_trait]
impl KnowledgeBaseCatalog for InMemoryKnowledgeBaseCatalog {
    async fn list_knowledge_bases(
        &self,
        filter: Option<AccessFilter>,
    ) -> Result<Vec<KnowledgeBase>, DomainError> {
        let entries = self.entries.read().await;

        Ok(entries
            .iter()
            .filter(|entry| {
                filter
                    .as_ref()
                    .is_none_or(|f| entry.access.allows(&f.user_id, f.permission))
            })
            .map(|entry| entry.knowledge_base.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::knowledge_base::KnowledgeBaseId;

    fn kb(id: &str) -> KnowledgeBase {
        KnowledgeBase::new(KnowledgeBaseId::new(id).unwrap(), id.to_uppercase())
    }

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    async fn seeded_catalog() -> InMemoryKnowledgeBaseCatalog {
        let catalog = InMemoryKnowledgeBaseCatalog::new();
        catalog.insert(kb("kb-public"), AccessControl::public()).await;
        catalog
            .insert(kb("kb-alice"), AccessControl::owned_by(user("alice")))
            .await;
        catalog
            .insert(
                kb("kb-shared"),
                AccessControl::owned_by(user("alice")).with_reader(user("bob")),
            )
            .await;
        catalog
            .insert(
                kb("kb-team"),
                AccessControl::owned_by(user("carol")).with_reader(user("bob")),
            )
            .await;
        catalog
    }

    fn ids(kbs: &[KnowledgeBase]) -> Vec<&str> {
        kbs.iter().map(|kb| kb.id().as_str()).collect()
    }

    #[tokio::test]
    async fn test_unfiltered_listing_returns_everything_in_order() {
        let catalog = seeded_catalog().await;

        let kbs = catalog.list_knowledge_bases(None).await.unwrap();

        assert_eq!(ids(&kbs), vec!["kb-public", "kb-alice", "kb-shared", "kb-team"]);
    }

    #[tokio::test]
    async fn test_read_filter_honours_access_control() {
        let catalog = seeded_catalog().await;

        let bob = catalog
            .list_knowledge_bases(Some(AccessFilter::readable_by(user("bob"))))
            .await
            .unwrap();
        assert_eq!(ids(&bob), vec!["kb-public", "kb-shared", "kb-team"]);

        let mallory = catalog
            .list_knowledge_bases(Some(AccessFilter::readable_by(user("mallory"))))
            .await
            .unwrap();
        assert_eq!(ids(&mallory), vec!["kb-public"]);
    }

    #[tokio::test]
    async fn test_owner_reads_private_entries() {
        let catalog = seeded_catalog().await;

        let alice = catalog
            .list_knowledge_bases(Some(AccessFilter::readable_by(user("alice"))))
            .await
            .unwrap();

        assert_eq!(ids(&alice), vec!["kb-public", "kb-alice", "kb-shared"]);
    }

    #[tokio::test]
    async fn test_insert_replaces_existing_entry() {
        let catalog = seeded_catalog().await;

        catalog
            .insert(kb("kb-alice").with_description("updated"), AccessControl::public())
            .await;

        let kbs = catalog.list_knowledge_bases(None).await.unwrap();
        assert_eq!(ids(&kbs), vec!["kb-public", "kb-alice", "kb-shared", "kb-team"]);
        assert_eq!(kbs[1].description(), Some("updated"));

        let mallory = catalog
            .list_knowledge_bases(Some(AccessFilter::readable_by(user("mallory"))))
            .await
            .unwrap();
        assert_eq!(ids(&mallory), vec!["kb-public", "kb-alice"]);
    }
}
