//! Knowledge base validation utilities

use std::fmt;

/// Knowledge base validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum KnowledgeBaseValidationError {
    /// ID is empty or whitespace only
    EmptyId,
}

impl fmt::Display for KnowledgeBaseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Knowledge base ID cannot be empty"),
        }
    }
}

impl std::error::Error for KnowledgeBaseValidationError {}

/// Validate a knowledge base ID
///
/// IDs are opaque collection names owned by the host, so any non-blank
/// string is accepted; the retrieval service decides whether it exists.
pub fn validate_knowledge_base_id(id: &str) -> Result<(), KnowledgeBaseValidationError> {
    if id.trim().is_empty() {
        return Err(KnowledgeBaseValidationError::EmptyId);
    }

    Ok(())
}
