//! Per-call embedding capability

use std::sync::Arc;

use super::provider::EmbeddingProvider;
use crate::domain::user::User;
use crate::domain::DomainError;

/// An embedding provider bound to the caller it runs on behalf of
///
/// Built by the search tool for every call and handed to the retrieval
/// service, which embeds its queries through it.
#[derive(Debug, Clone)]
pub struct EmbeddingContext {
    provider: Arc<dyn EmbeddingProvider>,
    user: Option<User>,
}

impl EmbeddingContext {
    pub fn new(provider: Arc<dyn EmbeddingProvider>, user: Option<User>) -> Self {
        Self { provider, user }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Embed texts on behalf of the bound user
    pub async fn embed(
        &self,
        texts: &[String],
        prefix: Option<&str>,
    ) -> Result<Vec<Vec<f32>>, DomainError> {
        self.provider.embed(texts, prefix, self.user.as_ref()).await
    }
}
