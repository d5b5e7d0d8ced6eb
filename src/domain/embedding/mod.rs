//! Embedding domain - provider trait and the per-call embedding context

mod context;
mod provider;
mod vector;

pub use context::EmbeddingContext;
pub use provider::EmbeddingProvider;
pub use vector::{cosine_distance, cosine_similarity};

#[cfg(test)]
pub use provider::mock::MockEmbeddingProvider;
