//! RGF insurance advisor MCP server: entry point.

use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use rgf_insurance::{FetchConfig, RgfService};
use rgf_insurance_mcp::config::resolve_target_url;
use rgf_insurance_mcp::protocol::ProtocolHandler;
use rgf_insurance_mcp::tools::ToolRegistry;
use rgf_insurance_mcp::transport::StdioTransport;

#[derive(Parser)]
#[command(
    name = "rgf-insurance-mcp",
    about = "MCP server for the RGF car insurance advisor",
    version
)]
struct Cli {
    /// Page to read. Also reads RGF_TARGET_URL.
    #[arg(short, long, global = true)]
    url: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server over stdio (default).
    Serve,

    /// Start MCP server over HTTP.
    #[cfg(feature = "http")]
    ServeHttp {
        /// Listen address (host:port).
        #[arg(long, default_value = "127.0.0.1:3100")]
        addr: String,
    },

    /// Invoke one tool and print `{success, data|error}` as JSON.
    Call {
        /// Tool name, e.g. get_insurance_recommendation.
        tool: String,

        /// Arguments as a JSON object.
        #[arg(default_value = "{}")]
        args: String,
    },

    /// Print server capabilities as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   rgf-insurance-mcp completions bash > ~/.local/share/bash-completion/completions/rgf-insurance-mcp
    ///   rgf-insurance-mcp completions zsh > ~/.zfunc/_rgf-insurance-mcp
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },

    /// Launch interactive REPL mode.
    Repl,
}

fn build_service(url: Option<&str>) -> anyhow::Result<Arc<RgfService>> {
    let target = resolve_target_url(url);
    tracing::info!("Target page: {target}");
    Ok(Arc::new(RgfService::new(FetchConfig::for_url(target))?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let service = build_service(cli.url.as_deref())?;
            let transport = StdioTransport::new(ProtocolHandler::new(service));
            transport.run().await?;
        }

        #[cfg(feature = "http")]
        Commands::ServeHttp { addr } => {
            use rgf_insurance_mcp::transport::HttpTransport;

            let service = build_service(cli.url.as_deref())?;
            let transport = HttpTransport::new(ProtocolHandler::new(service));
            transport.run(&addr).await?;
        }

        Commands::Call { tool, args } => {
            let arguments: serde_json::Value = serde_json::from_str(&args)?;
            let service = build_service(cli.url.as_deref())?;
            let outcome = service.invoke(&tool, arguments).await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            if !outcome.success {
                std::process::exit(1);
            }
        }

        Commands::Info => {
            let handshake = rgf_insurance_mcp::types::InitializeResult::advisor();
            let tools = ToolRegistry::list_tools();
            let info = serde_json::json!({
                "server": handshake.server_info,
                "protocol_version": handshake.protocol_version,
                "capabilities": handshake.capabilities,
                "target_url": resolve_target_url(cli.url.as_deref()),
                "tools": tools.iter().map(|t| &t.name).collect::<Vec<_>>(),
                "tool_count": tools.len(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "rgf-insurance-mcp", &mut std::io::stdout());
        }

        Commands::Repl => {
            let service = build_service(cli.url.as_deref())?;
            rgf_insurance_mcp::repl::run(service)?;
        }
    }

    Ok(())
}
