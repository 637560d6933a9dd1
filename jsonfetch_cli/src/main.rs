mod output;

use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use jsonfetch_api::{lookup, Client, Document, ErrorKind};

use crate::output::OutputFormat;

/// Environment variable consulted when no endpoint argument is given.
const ENDPOINT_ENV: &str = "JSONFETCH_ENDPOINT";

#[derive(Parser, Debug)]
#[command(name = "jsonfetch")]
#[command(about = "Fetch a JSON document from an HTTP endpoint")]
struct Cli {
    /// Endpoint URL (defaults to $JSONFETCH_ENDPOINT, then https://api.example.com/data)
    endpoint: Option<String>,

    /// Print only the value at this dotted path, e.g. data.nested.value
    #[arg(long)]
    path: Option<String>,

    /// Print single-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jsonfetch=info".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let env_endpoint = std::env::var(ENDPOINT_ENV).ok();
    let endpoint = resolve_endpoint(cli.endpoint.as_deref(), env_endpoint.as_deref());
    let client = Client::with_endpoint(endpoint);

    tracing::info!("Fetching {}", client.endpoint());
    let doc = client
        .fetch_data()
        .with_context(|| format!("Failed to fetch {}", client.endpoint()))?;

    let selected = select(&doc, cli.path.as_deref())?;
    let format = if cli.compact {
        OutputFormat::Compact
    } else {
        OutputFormat::Pretty
    };
    output::print_json(selected, format)
}

/// Argument first, then environment. Empty values count as unset; the
/// client supplies its own default after that.
fn resolve_endpoint<'a>(arg: Option<&'a str>, env: Option<&'a str>) -> &'a str {
    arg.filter(|s| !s.trim().is_empty())
        .or(env.filter(|s| !s.trim().is_empty()))
        .unwrap_or("")
}

fn select<'a>(doc: &'a Document, path: Option<&str>) -> Result<&'a Document> {
    match path {
        None => Ok(doc),
        Some(p) => lookup(doc, p).ok_or_else(|| anyhow!("path '{}' not found in response", p)),
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<jsonfetch_api::Error>().map(|e| e.kind()) {
        Some(ErrorKind::Network) => 3,
        Some(ErrorKind::Parse) => 4,
        Some(ErrorKind::Response) => 5,
        None => 1,
    }
}
