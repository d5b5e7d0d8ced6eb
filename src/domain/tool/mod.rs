//! Tool domain - the knowledge search adapter and its call surface

mod context;
mod definition;
mod error;
pub mod formatting;
mod search;
mod valves;

pub use context::ToolContext;
pub use definition::{
    tool_definitions, KnowledgeBaseIdsArg, SearchKnowledgeArgs, ToolDefinition,
    LIST_AVAILABLE_KNOWLEDGE_BASES, SEARCH_KNOWLEDGE,
};
pub use error::{ListError, SearchError, ToolCallError};
pub use formatting::citation_ids;
pub use search::KnowledgeSearchTool;
pub use valves::{has_knowledge_base_ids, parse_knowledge_base_ids, Valves};
