use async_trait::async_trait;
use tracing::info;

use crate::domain::event::{EventEmitter, ToolEvent};

/// Writes events to the log
///
/// Used when a tool runs without an interactive host, e.g. from the CLI.
#[derive(Debug, Clone, Default)]
pub struct TracingEventEmitter;

impl TracingEventEmitter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventEmitter for TracingEventEmitter {
    async fn emit(&self, event: ToolEvent) {
        match &event {
            ToolEvent::Status(status) => {
                info!(done = status.done, "{}", status.description);
            }
            ToolEvent::Citation(citation) => {
                info!(
                    source = %citation.source.name,
                    url = %citation.source.url,
                    "Citation"
                );
            }
        }
    }
}
