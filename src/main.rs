// src/main.rs
// Linesmith - line-addressable file tools over MCP

use anyhow::Result;
use clap::{Parser, Subcommand};
use linesmith::mcp::LinesmithServer;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "linesmith")]
#[command(about = "Line-addressable file editing, search, and listing over MCP")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run as MCP server on stdio (default)
    Serve,
}

async fn run_mcp_server() -> Result<()> {
    let server = LinesmithServer::new();

    // Run with stdio transport
    let transport = rmcp::transport::io::stdio();
    let service = rmcp::serve_server(server, transport).await?;
    service.waiting().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Quiet for MCP stdio: stdout belongs to the transport, logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None | Some(Commands::Serve) => {
            run_mcp_server().await?;
        }
    }

    Ok(())
}
