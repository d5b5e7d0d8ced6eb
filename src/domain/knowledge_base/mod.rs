//! Knowledge Base domain - catalog entries and the catalog collaborator

mod catalog;
mod entity;
mod validation;

pub use catalog::{AccessFilter, KnowledgeBaseCatalog, Permission};
pub use entity::{KnowledgeBase, KnowledgeBaseData, KnowledgeBaseId};
pub use validation::{validate_knowledge_base_id, KnowledgeBaseValidationError};

#[cfg(test)]
pub use catalog::MockKnowledgeBaseCatalog;
