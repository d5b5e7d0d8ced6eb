//! Seed data for the in-memory collaborators
//!
//! A seed file lists users and knowledge bases together with the documents
//! indexed under each knowledge base. Files ending in `.toml` are parsed as
//! TOML, everything else as JSON.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use super::knowledge_base::{AccessControl, InMemoryKnowledgeBaseCatalog};
use super::retrieval::InMemoryRetrievalService;
use super::user::InMemoryUserDirectory;
use crate::domain::knowledge_base::{KnowledgeBase, KnowledgeBaseData, KnowledgeBaseId};
use crate::domain::retrieval::ChunkMetadata;
use crate::domain::user::User;
use crate::domain::DomainError;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON seed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse TOML seed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to index seed documents: {0}")]
    Indexing(#[from] DomainError),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub knowledge_bases: Vec<SeedKnowledgeBase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedKnowledgeBase {
    pub id: KnowledgeBaseId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Files attached to the knowledge base; collected from the documents
    /// when omitted
    #[serde(default)]
    pub file_ids: Option<Vec<String>>,
    #[serde(default)]
    pub access: AccessControl,
    #[serde(default)]
    pub documents: Vec<SeedDocument>,
}

/// A chunk of text indexed under a knowledge base
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedDocument {
    pub content: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub file_id: Option<String>,
    #[serde(default)]
    pub metadata: ChunkMetadata,
}

/// Counts of what a seed put into the collaborators
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub knowledge_bases: usize,
    pub documents: usize,
}

impl SeedData {
    /// Load seed data from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading seed data");

        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SeedError> {
        Ok(toml::from_str(content)?)
    }

    /// Populate the in-memory collaborators
    pub async fn apply(
        self,
        users: &InMemoryUserDirectory,
        catalog: &InMemoryKnowledgeBaseCatalog,
        retrieval: &InMemoryRetrievalService,
    ) -> Result<SeedSummary, SeedError> {
        let mut summary = SeedSummary::default();

        for user in self.users {
            users.insert(user).await;
            summary.users += 1;
        }

        for seed in self.knowledge_bases {
            let knowledge_base = seed.to_knowledge_base();
            let chunks: Vec<(String, ChunkMetadata)> =
                seed.documents.into_iter().map(SeedDocument::into_chunk).collect();

            if !chunks.is_empty() {
                summary.documents += retrieval.add_chunks(&seed.id, chunks).await?;
            }

            debug!(knowledge_base = %seed.id, "Seeded knowledge base");
            catalog.insert(knowledge_base, seed.access).await;
            summary.knowledge_bases += 1;
        }

        info!(
            users = summary.users,
            knowledge_bases = summary.knowledge_bases,
            documents = summary.documents,
            "Seed data applied"
        );

        Ok(summary)
    }
}

impl SeedKnowledgeBase {
    fn to_knowledge_base(&self) -> KnowledgeBase {
        let mut knowledge_base = KnowledgeBase::new(self.id.clone(), self.name.clone());

        if let Some(description) = &self.description {
            knowledge_base = knowledge_base.with_description(description.clone());
        }

        let file_ids = match &self.file_ids {
            Some(file_ids) => Some(file_ids.clone()),
            None => {
                let collected: BTreeSet<&str> = self
                    .documents
                    .iter()
                    .filter_map(|doc| doc.file_id.as_deref())
                    .collect();
                (!collected.is_empty()).then(|| collected.into_iter().map(String::from).collect())
            }
        };

        match file_ids {
            Some(file_ids) => knowledge_base.with_data(KnowledgeBaseData::with_file_ids(file_ids)),
            None => knowledge_base,
        }
    }
}

impl SeedDocument {
    fn into_chunk(self) -> (String, ChunkMetadata) {
        let mut metadata = self.metadata;

        if let Some(source) = self.source {
            metadata.insert("source".to_string(), Value::String(source));
        }
        if let Some(file_id) = self.file_id {
            metadata.insert("file_id".to_string(), Value::String(file_id));
        }

        (self.content, metadata)
    }
}
