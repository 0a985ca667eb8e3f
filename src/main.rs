use std::env;

use adservice_publisher::api::AdserviceApi;
use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "adservice-publisher")]
#[command(about = "Fetch Adservice publisher data and render it as an HTML table")]
struct Args {
    /// Endpoint to fetch, e.g. campaigns/feeds
    #[arg(long, default_value = "")]
    service: String,

    /// API key; falls back to ADSERVICE_API_KEY
    #[arg(long, default_value = "")]
    apikey: String,

    /// Override the endpoint allow-list (repeatable)
    #[arg(long = "allow")]
    allow: Vec<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let api_key = if args.apikey.is_empty() {
        env::var("ADSERVICE_API_KEY").unwrap_or_default()
    } else {
        args.apikey
    };

    let api = match AdserviceApi::new(api_key) {
        Ok(api) => api,
        Err(err) => {
            error!("failed to construct Adservice client: {err}");
            return Err(err);
        }
    };
    let api = if args.allow.is_empty() {
        api
    } else {
        api.with_allowed_endpoints(args.allow)
    };

    println!("{}", api.fetch(&args.service).await);

    Ok(())
}
