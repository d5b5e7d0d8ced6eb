//! Event sink trait

use std::fmt::Debug;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::ToolEvent;

/// Best-effort sink for tool events
///
/// Emission has no result: a sink that cannot deliver an event drops it.
/// Events from a single call are emitted in order.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait EventEmitter: Send + Sync + Debug {
    async fn emit(&self, event: ToolEvent);
}
