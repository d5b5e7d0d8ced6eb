//! In-memory retrieval service for development and testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::domain::embedding::{cosine_distance, EmbeddingProvider};
use crate::domain::knowledge_base::KnowledgeBaseId;
use crate::domain::retrieval::{
    ChunkMetadata, RetrievalQuery, RetrievalResult, RetrievalService, RetrievedChunk,
};
use crate::domain::DomainError;

#[derive(Debug, Clone)]
struct StoredChunk {
    document: String,
    metadata: ChunkMetadata,
    vector: Vec<f32>,
}

/// Brute-force cosine search over chunks held in memory
///
/// Chunks are embedded with the ingestion provider when added; queries are
/// embedded through the per-call embedding context, so both must share a
/// vector space. Hits from all requested collections are merged and ordered
/// by ascending cosine distance.
#[derive(Debug)]
pub struct InMemoryRetrievalService {
    embedder: Arc<dyn EmbeddingProvider>,
    collections: Arc<RwLock<HashMap<String, Vec<StoredChunk>>>>,
}

impl InMemoryRetrievalService {
    /// Create a new service that embeds added chunks with `embedder`
    pub fn new(embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            embedder,
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Embed and append chunks to a collection, creating it if needed
    pub async fn add_chunks(
        &self,
        collection: &KnowledgeBaseId,
        chunks: Vec<(String, ChunkMetadata)>,
    ) -> Result<usize, DomainError> {
        let texts: Vec<String> = chunks.iter().map(|(text, _)| text.clone()).collect();
        let vectors = self.embedder.embed(&texts, None, None).await?;

        if vectors.len() != chunks.len() {
            return Err(DomainError::embedding(
                self.embedder.provider_name(),
                format!("expected {} vectors, got {}", chunks.len(), vectors.len()),
            ));
        }

        let mut collections = self.collections.write().await;
        let stored = collections
            .entry(collection.as_str().to_string())
            .or_default();

        let added = chunks.len();
        stored.extend(
            chunks
                .into_iter()
                .zip(vectors)
                .map(|((document, metadata), vector)| StoredChunk {
                    document,
                    metadata,
                    vector,
                }),
        );

        Ok(added)
    }
}

#[async_trait]
impl RetrievalService for InMemoryRetrievalService {
    async fn query_collection(
        &self,
        query: RetrievalQuery,
    ) -> Result<RetrievalResult, DomainError> {
        let query_vectors = query.embedding.embed(&query.queries, None).await?;
        let collections = self.collections.read().await;

        let searched: Vec<&Vec<StoredChunk>> = query
            .collection_names
            .iter()
            .filter_map(|name| {
                let found = collections.get(name.as_str());
                if found.is_none() {
                    warn!(collection = %name, "Skipping unknown collection");
                }
                found
            })
            .collect();

        let mut result = RetrievalResult::empty();

        for query_vector in &query_vectors {
            let mut scored: Vec<(f32, &StoredChunk)> = searched
                .iter()
                .flat_map(|chunks| chunks.iter())
                .map(|chunk| (cosine_distance(query_vector, &chunk.vector), chunk))
                .collect();

            scored.sort_by(|a, b| a.0.total_cmp(&b.0));
            scored.truncate(query.k as usize);

            result.push_query(
                scored
                    .into_iter()
                    .map(|(distance, chunk)| RetrievedChunk {
                        document: chunk.document.clone(),
                        metadata: chunk.metadata.clone(),
                        distance: Some(distance),
                    })
                    .collect(),
            );
        }

        debug!(
            collections = ?query.collection_name_strs(),
            queries = query.queries.len(),
            "In-memory retrieval completed"
        );

        Ok(result)
    }
}
