//! Knowledge search tool

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::context::ToolContext;
use super::error::{ListError, SearchError};
use super::formatting::{
    display_name, format_knowledge_base_listing, format_search_response, found_status,
    no_results_message, NO_RESULTS_STATUS, SEARCH_STARTED_STATUS,
};
use super::valves::{has_knowledge_base_ids, parse_knowledge_base_ids, Valves};
use crate::domain::embedding::{EmbeddingContext, EmbeddingProvider};
use crate::domain::event::{CitationEvent, ToolEvent};
use crate::domain::knowledge_base::{AccessFilter, KnowledgeBaseCatalog, KnowledgeBaseId};
use crate::domain::retrieval::{RetrievalQuery, RetrievalService, RetrievedChunk};
use crate::domain::user::{User, UserDirectory};

/// Searches knowledge bases on demand and lists the ones a caller can see
///
/// Both operations always return text: failures are rendered as error
/// messages for the calling model instead of being propagated.
#[derive(Debug, Clone)]
pub struct KnowledgeSearchTool {
    valves: Valves,
    retrieval: Arc<dyn RetrievalService>,
    catalog: Arc<dyn KnowledgeBaseCatalog>,
    users: Arc<dyn UserDirectory>,
    embedding: Arc<dyn EmbeddingProvider>,
}

impl KnowledgeSearchTool {
    pub fn new(
        valves: Valves,
        retrieval: Arc<dyn RetrievalService>,
        catalog: Arc<dyn KnowledgeBaseCatalog>,
        users: Arc<dyn UserDirectory>,
        embedding: Arc<dyn EmbeddingProvider>,
    ) -> Self {
        Self {
            valves,
            retrieval,
            catalog,
            users,
            embedding,
        }
    }

    /// Search knowledge bases and return the hits as cited source blocks
    ///
    /// `knowledge_base_ids` is a comma-separated list; when it names no ID the
    /// configured defaults are searched.
    pub async fn search_knowledge(
        &self,
        query: &str,
        knowledge_base_ids: Option<&str>,
        ctx: &ToolContext,
    ) -> String {
        ctx.emit(ToolEvent::status(SEARCH_STARTED_STATUS, false)).await;

        let hits = match self.retrieve(query, knowledge_base_ids, ctx).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(error = %e, "Knowledge search failed");
                let message = e.to_tool_output();
                ctx.emit(ToolEvent::status(message.clone(), true)).await;
                return message;
            }
        };

        if hits.is_empty() {
            info!(query = %query, "Knowledge search returned no documents");
            ctx.emit(ToolEvent::status(NO_RESULTS_STATUS, true)).await;
            return no_results_message(query);
        }

        for (i, hit) in hits.iter().enumerate() {
            let name = display_name(hit, i + 1);
            ctx.emit(ToolEvent::Citation(CitationEvent::from_chunk(hit, &name)))
                .await;
        }

        info!(query = %query, count = hits.len(), "Knowledge search completed");
        ctx.emit(ToolEvent::status(found_status(hits.len()), true))
            .await;

        format_search_response(&hits)
    }

    /// List the knowledge bases visible to the caller
    pub async fn list_available_knowledge_bases(&self, ctx: &ToolContext) -> String {
        let filter = ctx.user_id().cloned().map(AccessFilter::readable_by);

        debug!(
            user_id = ?ctx.user_id().map(|id| id.as_str()),
            "Listing knowledge bases"
        );

        match self.catalog.list_knowledge_bases(filter).await {
            Ok(knowledge_bases) => format_knowledge_base_listing(&knowledge_bases),
            Err(e) => {
                warn!(error = %e, "Listing knowledge bases failed");
                ListError::from(e).to_tool_output()
            }
        }
    }

    /// Resolve the knowledge bases to search; explicit IDs win over the defaults
    pub fn resolve_knowledge_base_ids(
        &self,
        explicit: Option<&str>,
    ) -> Result<Vec<KnowledgeBaseId>, SearchError> {
        let raw = explicit
            .filter(|ids| has_knowledge_base_ids(ids))
            .or_else(|| {
                Some(self.valves.default_knowledge_bases.as_str())
                    .filter(|ids| has_knowledge_base_ids(ids))
            })
            .ok_or(SearchError::Configuration)?;

        Ok(parse_knowledge_base_ids(raw))
    }

    async fn retrieve(
        &self,
        query: &str,
        knowledge_base_ids: Option<&str>,
        ctx: &ToolContext,
    ) -> Result<Vec<RetrievedChunk>, SearchError> {
        let kb_ids = self.resolve_knowledge_base_ids(knowledge_base_ids)?;

        if query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let user = self.resolve_user(ctx).await?;
        let embedding = EmbeddingContext::new(self.embedding.clone(), user);

        if self.valves.relevance_threshold > 0.0 {
            debug!(
                threshold = self.valves.relevance_threshold,
                "Relevance threshold is configured but not applied to results"
            );
        }

        debug!(
            knowledge_bases = ?kb_ids.iter().map(|id| id.as_str()).collect::<Vec<_>>(),
            top_k = self.valves.top_k,
            embedding_provider = embedding.provider_name(),
            "Querying knowledge base collections"
        );

        let result = self
            .retrieval
            .query_collection(RetrievalQuery::new(
                kb_ids,
                vec![query.to_string()],
                embedding,
                self.valves.top_k,
            ))
            .await?;

        Ok(result.hits(0))
    }

    async fn resolve_user(&self, ctx: &ToolContext) -> Result<Option<User>, SearchError> {
        match ctx.user_id() {
            Some(id) => Ok(self.users.get_user_by_id(id).await?),
            None => Ok(None),
        }
    }
}
