//! KEGG MCP Server - Entry Point
//!
//! `serve` runs the MCP server over stdio or HTTP; `batch` processes a CSV
//! of pathway IDs and prints the results.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use kegg_mcp::{
    CachedKegg, KeggApi, KeggClient, batch,
    config::{self, Config},
    models::OutputFormat,
    server::McpServer,
};

#[derive(Parser, Debug)]
#[command(name = "kegg-mcp")]
#[command(about = "KEGG pathway drug lookups as an MCP server or CSV batch job")]
#[command(version)]
struct Cli {
    /// KEGG REST base URL
    #[arg(long, global = true, env = config::env::KEGG_BASE)]
    kegg_base: Option<String>,

    /// Delay after every request, in seconds
    #[arg(
        long,
        global = true,
        env = config::env::REQUEST_INTERVAL,
        value_parser = config::parse_interval
    )]
    request_interval: Option<Duration>,

    /// Retries allowed on a 429 response
    #[arg(long, global = true, env = config::env::MAX_RETRIES)]
    max_retries: Option<u32>,

    /// Disable the in-memory lookup cache
    #[arg(long, global = true)]
    no_cache: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the MCP server
    Serve {
        /// Transport mode: stdio or http
        #[arg(long, default_value = "stdio")]
        transport: Transport,

        /// HTTP server port (only used with --transport http)
        #[arg(long, default_value = "8000", env = "PORT")]
        port: u16,
    },

    /// Look up every pathway in a CSV file
    Batch {
        /// CSV file with a `pathway_id` column
        #[arg(long, default_value = "pathways.csv")]
        csv: PathBuf,

        /// Output format
        #[arg(long, default_value = "json")]
        format: OutputFormat,

        /// One row per (pathway, drug) instead of one per pathway
        #[arg(long)]
        table: bool,
    },
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Transport {
    /// Standard input/output
    #[default]
    Stdio,
    /// JSON-RPC over HTTP POST
    Http,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // stdout carries MCP messages and batch output
    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

/// Environment and `.env` first, then command-line overrides.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::from_env()?;

    if let Some(base) = &cli.kegg_base {
        config.kegg_base = base.trim_end_matches('/').to_string();
    }
    if let Some(interval) = cli.request_interval {
        config.request_interval = interval;
    }
    if let Some(max_retries) = cli.max_retries {
        config.max_retries = max_retries;
    }

    Ok(config)
}

fn build_api(config: Config, no_cache: bool) -> anyhow::Result<Arc<dyn KeggApi>> {
    let cache_config = config.clone();
    let client = KeggClient::new(config)?;

    if no_cache {
        Ok(Arc::new(client))
    } else {
        Ok(Arc::new(CachedKegg::new(client, &cache_config)))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = load_config(&cli)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        kegg_base = %config.kegg_base,
        interval_ms = config.request_interval.as_millis() as u64,
        max_retries = config.max_retries,
        cache = !cli.no_cache,
        "Starting KEGG MCP"
    );

    let api = build_api(config, cli.no_cache)?;

    match cli.command {
        Command::Serve { transport, port } => {
            let server = McpServer::new(api);
            match transport {
                Transport::Stdio => server.run_stdio().await?,
                Transport::Http => server.run_http(port).await?,
            }
        }
        Command::Batch { csv, format, table } => {
            if !csv.is_file() {
                eprintln!("CSV file not found: {}\n", csv.display());
                Cli::command().print_help()?;
                return Ok(ExitCode::FAILURE);
            }

            let pathway_ids = batch::read_pathway_ids(&csv).await?;
            tracing::info!(path = %csv.display(), pathways = pathway_ids.len(), "Read batch input");

            let rows = batch::run_batch(api.as_ref(), &pathway_ids).await;
            println!("{}", batch::render(&rows, format, table)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
