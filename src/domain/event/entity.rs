//! Progress and citation events surfaced to the host UI

use serde::{Deserialize, Serialize};

use crate::domain::retrieval::RetrievedChunk;

/// An event emitted while a tool call runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ToolEvent {
    Status(StatusEvent),
    Citation(CitationEvent),
}

impl ToolEvent {
    /// A status update; `done` marks the final status of a call
    pub fn status(description: impl Into<String>, done: bool) -> Self {
        Self::Status(StatusEvent {
            description: description.into(),
            done,
        })
    }

    pub fn is_citation(&self) -> bool {
        matches!(self, Self::Citation(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub description: String,
    pub done: bool,
}

/// Citation for one retrieved chunk, rendered by the host next to the answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationEvent {
    pub document: Vec<String>,
    pub metadata: Vec<CitationMetadata>,
    pub source: CitationSource,
}

impl CitationEvent {
    /// Build the citation for a chunk displayed under `source_name`
    pub fn from_chunk(chunk: &RetrievedChunk, source_name: &str) -> Self {
        let file_id = chunk.file_id();

        Self {
            document: vec![chunk.document.clone()],
            metadata: vec![CitationMetadata {
                source: source_name.to_string(),
                file_id: file_id.clone(),
                relevance_score: chunk.distance.map(round_score),
            }],
            source: CitationSource {
                name: source_name.to_string(),
                url: format!("#file-{}", file_id),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationMetadata {
    pub source: String,
    pub file_id: String,
    /// Raw retrieval score rounded to three decimals; direction is not asserted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitationSource {
    pub name: String,
    pub url: String,
}

fn round_score(score: f32) -> f64 {
    (f64::from(score) * 1000.0).round() / 1000.0
}
