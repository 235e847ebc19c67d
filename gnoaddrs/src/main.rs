use anyhow::Result;
use clap::Parser;
use gnoaddrs::{collect_unique_addresses, config::Args, indexer::IndexerClient};
use tracing::info;

fn main() -> Result<()> {
    // stdout carries the report only
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    info!("Starting gnoaddrs");
    let args = Args::parse();
    let endpoint = args.indexer_endpoint()?;

    let client = IndexerClient::new(endpoint);
    info!("Querying {}", client);
    let report = collect_unique_addresses(&client)?;

    print!("{}", report);

    Ok(())
}
