//! Static tool configuration ("valves")

use serde::{Deserialize, Serialize};

use crate::domain::knowledge_base::KnowledgeBaseId;

/// Valves read by the search tool at call time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Valves {
    /// Comma-separated knowledge base IDs searched when a call names none
    #[serde(default)]
    pub default_knowledge_bases: String,
    /// Number of relevant chunks to retrieve
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    /// Minimum relevance score (0.0 - 1.0). Accepted but not applied to results.
    #[serde(default)]
    pub relevance_threshold: f32,
}

fn default_top_k() -> u32 {
    5
}

impl Default for Valves {
    fn default() -> Self {
        Self {
            default_knowledge_bases: String::new(),
            top_k: default_top_k(),
            relevance_threshold: 0.0,
        }
    }
}

impl Valves {
    /// Set the default knowledge bases
    pub fn with_default_knowledge_bases(mut self, ids: impl Into<String>) -> Self {
        self.default_knowledge_bases = ids.into();
        self
    }

    /// Set top_k
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set relevance threshold
    pub fn with_relevance_threshold(mut self, threshold: f32) -> Self {
        self.relevance_threshold = threshold;
        self
    }
}

/// Whether a comma-separated list names at least one ID
pub fn has_knowledge_base_ids(raw: &str) -> bool {
    raw.split(',').any(|id| !id.trim().is_empty())
}

/// Parse a comma-separated ID list, trimming entries and dropping blank ones
///
/// Segments are otherwise passed through unchanged.
pub fn parse_knowledge_base_ids(raw: &str) -> Vec<KnowledgeBaseId> {
    raw.split(',')
        .filter_map(|id| KnowledgeBaseId::new(id.trim()).ok())
        .collect()
}
