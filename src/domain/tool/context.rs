//! Per-call tool context

use std::sync::Arc;

use crate::domain::event::{EventEmitter, ToolEvent};
use crate::domain::user::UserId;

/// Who is calling and where progress events go
#[derive(Debug, Clone, Default)]
pub struct ToolContext {
    user_id: Option<UserId>,
    emitter: Option<Arc<dyn EventEmitter>>,
}

impl ToolContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the caller identity
    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set the event sink
    pub fn with_emitter(mut self, emitter: Arc<dyn EventEmitter>) -> Self {
        self.emitter = Some(emitter);
        self
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    /// Forward an event to the sink, if one is attached
    pub async fn emit(&self, event: ToolEvent) {
        if let Some(emitter) = &self.emitter {
            emitter.emit(event).await;
        }
    }
}
