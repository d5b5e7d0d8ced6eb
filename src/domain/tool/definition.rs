//! Tool-call surface: definitions and dispatch by name

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::context::ToolContext;
use super::error::ToolCallError;
use super::search::KnowledgeSearchTool;

pub const SEARCH_KNOWLEDGE: &str = "search_knowledge";
pub const LIST_AVAILABLE_KNOWLEDGE_BASES: &str = "list_available_knowledge_bases";

/// Function definition advertised to an LLM runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Definitions of every tool exposed by [`KnowledgeSearchTool`]
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: SEARCH_KNOWLEDGE.to_string(),
            description: "Search organizational knowledge bases for relevant information. \
                Use this tool when the user asks about internal documentation, policies or \
                procedures, technical specifications or guidelines, organizational knowledge \
                or best practices, or any topic that might be covered in the knowledge base. \
                Returns the retrieved information with numbered source citations."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query describing what information to find"
                    },
                    "knowledge_base_ids": {
                        "type": "string",
                        "description": "Optional comma-separated knowledge base IDs to search (e.g., \"kb_policies,kb_docs\"). If not provided, searches default knowledge bases."
                    }
                },
                "required": ["query"]
            }),
        },
        ToolDefinition {
            name: LIST_AVAILABLE_KNOWLEDGE_BASES.to_string(),
            description: "List all knowledge bases available to search. Use this tool when you \
                need to discover which knowledge bases exist and their IDs before searching them."
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {}
            }),
        },
    ]
}

/// Arguments of `search_knowledge`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchKnowledgeArgs {
    pub query: String,
    #[serde(default)]
    pub knowledge_base_ids: Option<KnowledgeBaseIdsArg>,
}

/// Knowledge base IDs as sent by a model: a comma-separated string or a list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum KnowledgeBaseIdsArg {
    Csv(String),
    List(Vec<String>),
}

impl KnowledgeBaseIdsArg {
    pub fn to_csv(&self) -> String {
        match self {
            Self::Csv(ids) => ids.clone(),
            Self::List(ids) => ids.join(","),
        }
    }
}

impl KnowledgeSearchTool {
    /// Dispatch a tool call by name
    ///
    /// `arguments` may be a JSON object or a string holding one, as LLM
    /// runtimes send tool arguments either way. Only dispatch failures are
    /// errors; the tools themselves always produce text.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: Value,
        ctx: &ToolContext,
    ) -> Result<String, ToolCallError> {
        debug!(tool = %name, "Invoking tool");

        match name {
            SEARCH_KNOWLEDGE => {
                let args: SearchKnowledgeArgs = parse_arguments(name, arguments)?;
                let ids = args.knowledge_base_ids.as_ref().map(KnowledgeBaseIdsArg::to_csv);

                Ok(self.search_knowledge(&args.query, ids.as_deref(), ctx).await)
            }
            LIST_AVAILABLE_KNOWLEDGE_BASES => Ok(self.list_available_knowledge_bases(ctx).await),
            other => Err(ToolCallError::UnknownTool(other.to_string())),
        }
    }
}

fn parse_arguments<T: serde::de::DeserializeOwned>(
    tool: &str,
    arguments: Value,
) -> Result<T, ToolCallError> {
    let arguments = match arguments {
        Value::String(raw) => serde_json::from_str(&raw)
            .map_err(|e| ToolCallError::invalid_arguments(tool, e.to_string()))?,
        Value::Null => json!({}),
        other => other,
    };

    serde_json::from_value(arguments).map_err(|e| ToolCallError::invalid_arguments(tool, e.to_string()))
}
