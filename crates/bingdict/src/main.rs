use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bingdict_config::LookupConfig;

/// Look up a word or phrase in the Bing online dictionary.
#[derive(Parser)]
#[command(name = "bingdict", version)]
struct Cli {
    /// Word or phrase to look up; multiple arguments join with spaces.
    #[arg(required = true)]
    words: Vec<String>,

    /// Retry attempts after the first failed request.
    #[arg(long)]
    retries: Option<u32>,

    /// Per-attempt timeout in milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Proxy URL to route requests through.
    #[arg(long)]
    proxy: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = LookupConfig::from_env();
    if let Some(retries) = cli.retries {
        config.retries = retries;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    if cli.proxy.is_some() {
        config.proxy = cli.proxy;
    }

    let word = cli.words.join(" ");
    let result = bingdict::lookup(&word, Some(config)).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
