//! Domain layer - Core entities, collaborator traits and the search tool

pub mod embedding;
pub mod error;
pub mod event;
pub mod knowledge_base;
pub mod retrieval;
pub mod tool;
pub mod user;

pub use embedding::{EmbeddingContext, EmbeddingProvider};
pub use error::DomainError;
pub use event::{CitationEvent, EventEmitter, StatusEvent, ToolEvent};
pub use knowledge_base::{
    AccessFilter, KnowledgeBase, KnowledgeBaseCatalog, KnowledgeBaseData, KnowledgeBaseId,
    KnowledgeBaseValidationError, Permission,
};
pub use retrieval::{RetrievalQuery, RetrievalResult, RetrievalService, RetrievedChunk};
pub use tool::{
    tool_definitions, KnowledgeSearchTool, SearchError, ToolCallError, ToolContext,
    ToolDefinition, Valves,
};
pub use user::{User, UserDirectory, UserId};
