//! Application state shared by the HTTP handlers

use std::sync::Arc;

use crate::domain::knowledge_base::KnowledgeBaseCatalog;
use crate::domain::tool::KnowledgeSearchTool;

#[derive(Debug, Clone)]
pub struct AppState {
    pub tool: Arc<KnowledgeSearchTool>,
    /// Probed by the readiness check
    pub catalog: Arc<dyn KnowledgeBaseCatalog>,
}

impl AppState {
    pub fn new(tool: Arc<KnowledgeSearchTool>, catalog: Arc<dyn KnowledgeBaseCatalog>) -> Self {
        Self { tool, catalog }
    }
}
