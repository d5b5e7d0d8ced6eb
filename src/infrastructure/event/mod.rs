//! Event emitter implementations

mod collecting;
mod logging;

pub use collecting::CollectingEventEmitter;
pub use logging::TracingEventEmitter;
