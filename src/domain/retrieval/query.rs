//! Retrieval request

use crate::domain::embedding::EmbeddingContext;
use crate::domain::knowledge_base::KnowledgeBaseId;

/// A similarity query against one or more collections
#[derive(Debug, Clone)]
pub struct RetrievalQuery {
    /// Collections (knowledge bases) to search
    pub collection_names: Vec<KnowledgeBaseId>,
    /// Query texts; the result carries one entry per query
    pub queries: Vec<String>,
    /// Embedding capability used to vectorise the queries
    pub embedding: EmbeddingContext,
    /// Upper bound on hits returned per query
    pub k: u32,
}

impl RetrievalQuery {
    pub fn new(
        collection_names: Vec<KnowledgeBaseId>,
        queries: Vec<String>,
        embedding: EmbeddingContext,
        k: u32,
    ) -> Self {
        Self {
            collection_names,
            queries,
            embedding,
            k,
        }
    }

    /// Collection names as plain strings
    pub fn collection_name_strs(&self) -> Vec<&str> {
        self.collection_names.iter().map(|id| id.as_str()).collect()
    }
}
