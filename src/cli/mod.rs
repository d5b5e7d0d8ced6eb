//! CLI module
//!
//! - `serve`: HTTP server exposing the tools
//! - `search`, `list`: run a single tool call and print its output
//! - `tools`: print the tool definitions

pub mod serve;
pub mod tool;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;

/// Knowledge Search Tool - knowledge base search for LLM tool calling
#[derive(Parser)]
#[command(name = "knowledge-search-tool")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Search knowledge bases and print the tool output
    Search(tool::SearchArgs),

    /// List the knowledge bases visible to a user
    List(tool::ListArgs),

    /// Print the tool definitions as JSON
    Tools,
}

/// Load `.env` and configuration, then install logging
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_logging(&config.logging)?;

    Ok(config)
}
