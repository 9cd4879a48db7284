use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use san_scaffold::mcp;

#[derive(Parser)]
#[command(name = "san-scaffold")]
#[command(about = "SanJS component scaffold generator served over MCP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server via stdio (for Claude Code integration)
    Mcp,
}

/// Initialize tracing with output to stderr - stdout is the protocol channel.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "san_scaffold=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Mcp) | None => {
            mcp::run_stdio_server().await?;
        }
    }

    Ok(())
}
