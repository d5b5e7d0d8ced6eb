//! Embedding provider trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::user::User;
use crate::domain::DomainError;

/// Trait for embedding providers
///
/// The provider is handed to the search tool at construction time; the
/// resolved caller is passed per call so providers can pick per-user models
/// or quotas.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Embed each input text, optionally prefixed (e.g. `"query: "` for asymmetric models)
    async fn embed(
        &self,
        texts: &[String],
        prefix: Option<&str>,
        user: Option<&User>,
    ) -> Result<Vec<Vec<f32>>, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
