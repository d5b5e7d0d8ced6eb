//! Knowledge base catalog implementations

mod in_memory;

pub use in_memory::{AccessControl, InMemoryKnowledgeBaseCatalog};
