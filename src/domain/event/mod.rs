//! Event domain - status and citation notifications

mod emitter;
mod entity;

pub use emitter::EventEmitter;
pub use entity::{CitationEvent, CitationMetadata, CitationSource, StatusEvent, ToolEvent};

#[cfg(test)]
pub use emitter::MockEventEmitter;
