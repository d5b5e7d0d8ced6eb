//! Retrieval domain - similarity search over knowledge base collections

mod query;
mod result;
mod service;

pub use query::RetrievalQuery;
pub use result::{ChunkMetadata, RetrievalResult, RetrievedChunk};
pub use service::RetrievalService;

#[cfg(test)]
pub use service::MockRetrievalService;
