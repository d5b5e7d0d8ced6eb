//! Knowledge Search Tool
//!
//! Lets an LLM search organizational knowledge bases on demand through tool
//! calls instead of having context injected up front:
//! - `search_knowledge`: vector search returning citation-tagged sources
//! - `list_available_knowledge_bases`: catalog listing filtered by user access

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::tool::KnowledgeSearchTool;
use infrastructure::{
    embedding::HashingEmbeddingProvider, knowledge_base::InMemoryKnowledgeBaseCatalog,
    retrieval::InMemoryRetrievalService, seed::SeedData, user::InMemoryUserDirectory,
};
use tracing::info;

/// Create the application state with in-memory collaborators
///
/// When `data.seed_path` is set, the seed file is loaded into the
/// collaborators before the tool is built.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let embedder = Arc::new(HashingEmbeddingProvider::default());
    let users = Arc::new(InMemoryUserDirectory::new());
    let catalog = Arc::new(InMemoryKnowledgeBaseCatalog::new());
    let retrieval = Arc::new(InMemoryRetrievalService::new(embedder.clone()));

    match &config.data.seed_path {
        Some(path) => {
            let summary = SeedData::from_file(path)?
                .apply(&users, &catalog, &retrieval)
                .await?;
            info!(
                path = %path,
                knowledge_bases = summary.knowledge_bases,
                "Seed data loaded"
            );
        }
        None => info!("No seed file configured, starting with empty knowledge bases"),
    }

    if config.valves.default_knowledge_bases.trim().is_empty() {
        info!("No default knowledge bases configured; searches must name their targets");
    }

    let tool = KnowledgeSearchTool::new(
        config.valves.clone(),
        retrieval,
        catalog.clone(),
        users,
        embedder,
    );

    Ok(AppState::new(Arc::new(tool), catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tool::ToolContext;
    use crate::domain::user::UserId;

    const SEED: &str = r#"{
        "users": [{"id": "alice", "name": "Alice"}],
        "knowledge_bases": [
            {
                "id": "kb-hr",
                "name": "HR Policies",
                "access": {"public": true},
                "documents": [
                    {"content": "Employees receive 25 vacation days per year.", "source": "vacation.md", "file_id": "f-1"}
                ]
            },
            {
                "id": "kb-board",
                "name": "Board Minutes",
                "access": {"owner": "alice"},
                "documents": [
                    {"content": "The board approved the budget.", "source": "minutes.md"}
                ]
            }
        ]
    }"#;

    fn write_seed() -> String {
        let path = std::env::temp_dir().join(format!("seed-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, SEED).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn test_state_without_seed_is_empty() {
        let state = create_app_state(&AppConfig::default()).await.unwrap();

        let output = state
            .tool
            .list_available_knowledge_bases(&ToolContext::new())
            .await;
        assert_eq!(output, "No knowledge bases are currently available.");

        let output = state
            .tool
            .search_knowledge("anything", None, &ToolContext::new())
            .await;
        assert!(output.starts_with("Error: No knowledge bases specified."));
    }

    #[tokio::test]
    async fn test_state_with_seed_searches_defaults() {
        let mut config = AppConfig::default();
        config.data.seed_path = Some(write_seed());
        config.valves.default_knowledge_bases = "kb-hr".to_string();

        let state = create_app_state(&config).await.unwrap();

        let output = state
            .tool
            .search_knowledge("vacation days", None, &ToolContext::new())
            .await;
        assert!(output.contains("<source id=\"1\" name=\"vacation.md\">"));
    }

    #[tokio::test]
    async fn test_state_with_seed_filters_listing_by_user() {
        let mut config = AppConfig::default();
        config.data.seed_path = Some(write_seed());

        let state = create_app_state(&config).await.unwrap();

        let alice = ToolContext::new().with_user(UserId::new("alice").unwrap());
        let bob = ToolContext::new().with_user(UserId::new("bob").unwrap());

        assert!(state
            .tool
            .list_available_knowledge_bases(&alice)
            .await
            .contains("Board Minutes"));
        assert!(!state
            .tool
            .list_available_knowledge_bases(&bob)
            .await
            .contains("Board Minutes"));
    }

    #[tokio::test]
    async fn test_missing_seed_file_fails() {
        let mut config = AppConfig::default();
        config.data.seed_path = Some("/nonexistent/seed.json".to_string());

        assert!(create_app_state(&config).await.is_err());
    }
}
