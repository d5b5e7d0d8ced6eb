//! HTTP request and response types

pub mod error;
pub mod tool;

pub use error::{ApiError, ApiErrorResponse};
pub use tool::{CallerRef, InvokeToolRequest, InvokeToolResponse, ToolsResponse};
