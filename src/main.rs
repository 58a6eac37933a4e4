use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use urlshort::build::builtin_mapping;
use urlshort::config::RedirectSource;
use urlshort::handler::{HelloHandler, MapHandler, document_handler};
use urlshort::http_server;

/// Redirect configured request paths to their target URLs.
#[derive(Debug, Parser)]
#[command(name = "urlshort", version, about)]
struct Cli {
    /// File holding the list of `{path, url}` redirects (`.json` for JSON, YAML otherwise)
    #[arg(short, long, value_name = "FILE", default_value = "redirects.yaml")]
    redirects: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "urlshort=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let source = RedirectSource::load_from_file(&cli.redirects)?;

    let fallback = MapHandler::new(builtin_mapping(), HelloHandler);
    let handler = document_handler(source.format, &source.raw, fallback)?;
    tracing::info!(
        redirects = handler.mapping().len(),
        builtin = builtin_mapping().len(),
        "handler chain ready"
    );

    http_server::start_server(http_server::DEFAULT_BIND, handler).await?;
    Ok(())
}
