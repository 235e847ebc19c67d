// Basic types used throughout gnoaddrs
pub mod types;

// The fixed GraphQL query sent to the indexer
pub mod query;
// HTTP client for the tx-indexer, behind the TransactionSource trait
pub mod indexer;
// Pulls address values out of the raw response text
pub mod extract;

// Deduplicated count + listing printed at the end of a run
pub mod summary;

// Command line / environment configuration
pub mod config;

use anyhow::{Context, Result};
use indexer::TransactionSource;
use summary::AddressReport;
use tracing::info;

/// Runs the whole pipeline against `source`: query, fetch, extract, deduplicate.
pub fn collect_unique_addresses<S: TransactionSource>(source: &S) -> Result<AddressReport> {
    let response = source
        .fetch(query::all_transactions_query())
        .context("Failed to fetch transactions from indexer")?;

    let (addresses, counts) = extract::extract_with_counts(response.as_str());
    info!("Per-label matches: {:?}", counts);

    let report = AddressReport::from_addresses(addresses);
    info!("Found {} unique addresses", report.total);
    Ok(report)
}
