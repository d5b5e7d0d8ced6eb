//! API layer - HTTP endpoints exposing the tools

pub mod health;
pub mod router;
pub mod state;
pub mod tools;
pub mod types;

pub use router::create_router;
pub use state::AppState;
