use clap::{Parser, ValueEnum};
use url::Url;

pub const LOCAL_INDEXER: &str = "http://localhost:8546/graphql/query";
pub const TEST4_INDEXER: &str = "https://indexer.test4.gno.land:443/graphql/query";
pub const TEST5_INDEXER: &str = "https://indexer.test5.gno.land:443/graphql/query";

/// Known indexer deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Network {
    Local,
    Test4,
    Test5,
}

impl Network {
    pub fn indexer_url(&self) -> &'static str {
        match self {
            Network::Local => LOCAL_INDEXER,
            Network::Test4 => TEST4_INDEXER,
            Network::Test5 => TEST5_INDEXER,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "List every unique address seen in gno.land indexer transactions")]
pub struct Args {
    /// Named indexer to query
    #[arg(
        short,
        long,
        value_enum,
        default_value = "local",
        env = "GNO_INDEXER_NETWORK"
    )]
    pub network: Network,
    /// Explicit GraphQL endpoint, overrides --network
    #[arg(short, long, value_parser = parse_endpoint, env = "GNO_INDEXER_URL")]
    pub endpoint: Option<Url>,
}

impl Args {
    pub fn indexer_endpoint(&self) -> anyhow::Result<Url> {
        match &self.endpoint {
            Some(url) => Ok(url.clone()),
            None => Ok(Url::parse(self.network.indexer_url())?),
        }
    }
}

/// Accepts only absolute `http` or `https` URLs.
pub fn parse_endpoint(value: &str) -> Result<Url, String> {
    let url = Url::parse(value).map_err(|e| format!("invalid endpoint URL `{value}`: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(format!(
            "unsupported scheme `{scheme}` in `{value}`, expected http or https"
        )),
    }
}
