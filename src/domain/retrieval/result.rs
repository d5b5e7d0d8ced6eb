//! Retrieval result set

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata attached to a stored chunk
pub type ChunkMetadata = HashMap<String, Value>;

/// Raw result of a retrieval call: parallel lists, one entry per query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    #[serde(default)]
    pub documents: Vec<Vec<String>>,
    #[serde(default)]
    pub metadatas: Vec<Vec<ChunkMetadata>>,
    #[serde(default)]
    pub distances: Vec<Vec<f32>>,
}

impl RetrievalResult {
    /// Empty result with no queries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append the hits for one query
    pub fn push_query(&mut self, hits: Vec<RetrievedChunk>) {
        let mut documents = Vec::with_capacity(hits.len());
        let mut metadatas = Vec::with_capacity(hits.len());
        let mut distances = Vec::with_capacity(hits.len());

        for hit in hits {
            documents.push(hit.document);
            metadatas.push(hit.metadata);
            distances.push(hit.distance.unwrap_or_default());
        }

        self.documents.push(documents);
        self.metadatas.push(metadatas);
        self.distances.push(distances);
    }

    /// Hits for the query at `index`, in retrieval order
    ///
    /// Items are driven by `documents`; a missing metadata entry becomes an
    /// empty map and a missing distance becomes `None`.
    pub fn hits(&self, index: usize) -> Vec<RetrievedChunk> {
        let Some(documents) = self.documents.get(index) else {
            return Vec::new();
        };
        let metadatas = self.metadatas.get(index);
        let distances = self.distances.get(index);

        documents
            .iter()
            .enumerate()
            .map(|(i, document)| RetrievedChunk {
                document: document.clone(),
                metadata: metadatas
                    .and_then(|m| m.get(i))
                    .cloned()
                    .unwrap_or_default(),
                distance: distances.and_then(|d| d.get(i)).copied(),
            })
            .collect()
    }
}

/// A single retrieved chunk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedChunk {
    /// Chunk text
    pub document: String,
    /// Chunk metadata (`source`, `file_id`, ...)
    #[serde(default)]
    pub metadata: ChunkMetadata,
    /// Raw score reported by the retrieval service; direction is backend-defined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f32>,
}

impl RetrievedChunk {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            metadata: HashMap::new(),
            distance: None,
        }
    }

    /// Add metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Set distance
    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Display name from the `source` metadata entry
    ///
    /// Strings are used as-is, other non-null values are rendered as JSON.
    pub fn source_name(&self) -> Option<String> {
        match self.metadata.get("source") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }

    /// File identifier from metadata, empty when absent
    pub fn file_id(&self) -> String {
        match self.metadata.get("file_id") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
