//! Infrastructure layer - In-memory collaborators and runtime plumbing

pub mod embedding;
pub mod event;
pub mod knowledge_base;
pub mod logging;
pub mod retrieval;
pub mod seed;
pub mod user;
