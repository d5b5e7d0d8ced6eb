use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::event::{EventEmitter, ToolEvent};

/// Buffers events in emission order so they can be returned with a response
#[derive(Debug, Clone, Default)]
pub struct CollectingEventEmitter {
    events: Arc<Mutex<Vec<ToolEvent>>>,
}

impl CollectingEventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the buffer
    pub async fn take(&self) -> Vec<ToolEvent> {
        std::mem::take(&mut *self.events.lock().await)
    }
}

#[async_trait]
impl EventEmitter for CollectingEventEmitter {
    async fn emit(&self, event: ToolEvent) {
        self.events.lock().await.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_collects_in_order() {
        let emitter = CollectingEventEmitter::new();

        emitter.emit(ToolEvent::status("first", false)).await;
        emitter.emit(ToolEvent::status("second", true)).await;

        let events = emitter.take().await;
        assert_eq!(
            events,
            vec![ToolEvent::status("first", false), ToolEvent::status("second", true)]
        );
    }

    #[tokio::test]
    async fn test_take_drains_buffer() {
        let emitter = CollectingEventEmitter::new();
        emitter.emit(ToolEvent::status("only", true)).await;

        assert_eq!(emitter.take().await.len(), 1);
        assert!(emitter.take().await.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_buffer() {
        let emitter = CollectingEventEmitter::new();
        let handle = emitter.clone();

        handle.emit(ToolEvent::status("shared", true)).await;

        assert_eq!(emitter.take().await.len(), 1);
    }
}
