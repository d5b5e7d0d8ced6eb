//! Tool error types

use thiserror::Error;

use crate::domain::DomainError;

/// Failures of a knowledge search; rendered to text at the tool boundary
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(
        "No knowledge bases specified. Please provide knowledge_base_ids parameter or configure default knowledge bases in tool settings."
    )]
    Configuration,

    #[error("Search query cannot be empty.")]
    EmptyQuery,

    #[error(transparent)]
    Retrieval(#[from] DomainError),
}

impl SearchError {
    /// Text returned to the calling model
    pub fn to_tool_output(&self) -> String {
        match self {
            Self::Configuration | Self::EmptyQuery => format!("Error: {}", self),
            Self::Retrieval(_) => format!("Error searching knowledge bases: {}", self),
        }
    }
}

/// Catalog failure while listing knowledge bases
#[derive(Debug, Error)]
#[error("Error listing knowledge bases: {0}")]
pub struct ListError(#[from] pub DomainError);

impl ListError {
    /// Text returned to the calling model
    pub fn to_tool_output(&self) -> String {
        self.to_string()
    }
}

/// Failures dispatching a tool call by name
#[derive(Debug, Error)]
pub enum ToolCallError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for '{tool}': {message}")]
    InvalidArguments { tool: String, message: String },
}

impl ToolCallError {
    pub fn invalid_arguments(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            message: message.into(),
        }
    }
}
