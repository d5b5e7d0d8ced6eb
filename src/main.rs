use clap::Parser;
use knowledge_search_tool::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Search(args) => cli::tool::search(args).await,
        Command::List(args) => cli::tool::list(args).await,
        Command::Tools => cli::tool::tools(),
    }
}
