//! Tool listing and invocation payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::event::ToolEvent;
use crate::domain::tool::ToolDefinition;
use crate::domain::user::UserId;

/// List tools response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsResponse {
    pub object: String,
    pub data: Vec<ToolDefinition>,
}

impl ToolsResponse {
    pub fn new(tools: Vec<ToolDefinition>) -> Self {
        Self {
            object: "list".to_string(),
            data: tools,
        }
    }
}

/// Body of `POST /tools/{name}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvokeToolRequest {
    /// Tool arguments, as an object or a JSON-encoded string
    #[serde(default)]
    pub arguments: Value,
    #[serde(default)]
    pub user: Option<CallerRef>,
}

/// Identity of the end user on whose behalf the tool runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerRef {
    pub id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeToolResponse {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub name: String,
    pub output: String,
    pub events: Vec<ToolEvent>,
}

impl InvokeToolResponse {
    pub fn new(name: impl Into<String>, output: String, events: Vec<ToolEvent>) -> Self {
        Self {
            id: format!("call_{}", Uuid::new_v4().simple()),
            object: "tool.result".to_string(),
            created: chrono::Utc::now().timestamp(),
            name: name.into(),
            output,
            events,
        }
    }
}
