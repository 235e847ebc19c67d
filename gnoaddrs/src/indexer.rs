use crate::types::RawResponse;
use serde::Serialize;
use std::{
    fmt::Display,
    io::{self, Read},
};
use tracing::{debug, info, warn};
use url::Url;

/// Errors that can come out of a single indexer fetch.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The outbound query payload could not be serialized.
    #[error("failed to encode query payload: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The endpoint could not be reached, or the body could not be read.
    #[error("network error talking to {endpoint}: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// The endpoint answered with something other than `200 OK`.
    #[error("received non-200 response from {endpoint}: {status}")]
    Protocol { endpoint: String, status: String },
}

/// TransactionSource
///
/// Anything that can answer the indexer query with a raw response body.
///
pub trait TransactionSource {
    fn fetch(&self, query: &str) -> Result<RawResponse, FetchError>;
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

/// IndexerClient
///
/// Blocking GraphQL-over-HTTP client for a tx-indexer endpoint.
///
/// Each `fetch` issues exactly one POST. There are no retries and no timeouts beyond
/// the transport defaults.
#[derive(Debug)]
pub struct IndexerClient {
    agent: ureq::Agent,
    endpoint: Url,
}

impl Display for IndexerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IndexerClient({})", self.endpoint)
    }
}

impl IndexerClient {
    pub fn new(endpoint: Url) -> Self {
        let agent = ureq::AgentBuilder::new().build();
        Self { agent, endpoint }
    }

    fn network_error(
        &self,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> FetchError {
        FetchError::Network {
            endpoint: self.endpoint.to_string(),
            source: Box::new(source),
        }
    }

    fn protocol_error(&self, response: ureq::Response) -> FetchError {
        let status = format!("{} {}", response.status(), response.status_text());
        drain(response);
        FetchError::Protocol {
            endpoint: self.endpoint.to_string(),
            status,
        }
    }
}

impl TransactionSource for IndexerClient {
    fn fetch(&self, query: &str) -> Result<RawResponse, FetchError> {
        let payload = serde_json::to_string(&GraphQlRequest { query })?;
        debug!("Posting {} byte query to {}", payload.len(), self.endpoint);

        let response = match self
            .agent
            .post(self.endpoint.as_str())
            .set("Content-Type", "application/json")
            .send_string(&payload)
        {
            Ok(response) => response,
            Err(ureq::Error::Status(code, response)) => {
                warn!("Indexer responded with status {}", code);
                return Err(self.protocol_error(response));
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(self.network_error(transport));
            }
        };

        // ureq hands back every non-error status, so 2xx/3xx other than 200 land here
        if response.status() != 200 {
            warn!("Indexer responded with status {}", response.status());
            return Err(self.protocol_error(response));
        }

        let mut bytes = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut bytes)
            .map_err(|e| self.network_error(e))?;
        info!("Received {} bytes from indexer", bytes.len());

        // stray invalid bytes must not hide the addresses around them
        let body = String::from_utf8_lossy(&bytes).into_owned();
        Ok(RawResponse::new(body))
    }
}

// Reading to EOF lets ureq return the connection to its pool.
fn drain(response: ureq::Response) {
    if let Err(e) = io::copy(&mut response.into_reader(), &mut io::sink()) {
        debug!("Failed to drain response body: {}", e);
    }
}
