//! One-shot tool commands

use std::sync::Arc;

use clap::Args;

use crate::domain::tool::{tool_definitions, ToolContext};
use crate::domain::user::UserId;
use crate::infrastructure::event::TracingEventEmitter;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// What to search for
    #[arg(short, long)]
    pub query: String,

    /// Comma-separated knowledge base IDs; the configured defaults when omitted
    #[arg(short, long)]
    pub knowledge_base_ids: Option<String>,

    /// Run on behalf of this user
    #[arg(short, long, value_parser = parse_user_id)]
    pub user: Option<UserId>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list knowledge bases this user can read
    #[arg(short, long, value_parser = parse_user_id)]
    pub user: Option<UserId>,
}

fn parse_user_id(raw: &str) -> Result<UserId, String> {
    UserId::new(raw).map_err(|e| e.to_string())
}

/// Run `search_knowledge` once and print the output
pub async fn search(args: SearchArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let state = crate::create_app_state(&config).await?;

    let output = state
        .tool
        .search_knowledge(&args.query, args.knowledge_base_ids.as_deref(), &context(args.user))
        .await;

    println!("{}", output);
    Ok(())
}

/// Run `list_available_knowledge_bases` once and print the output
pub async fn list(args: ListArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let state = crate::create_app_state(&config).await?;

    let output = state
        .tool
        .list_available_knowledge_bases(&context(args.user))
        .await;

    println!("{}", output);
    Ok(())
}

/// Print the tool definitions
pub fn tools() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&tool_definitions())?);
    Ok(())
}

fn context(user: Option<UserId>) -> ToolContext {
    let ctx = ToolContext::new().with_emitter(Arc::new(TracingEventEmitter::new()));

    match user {
        Some(user_id) => ctx.with_user(user_id),
        None => ctx,
    }
}
