//! HTTP client abstraction for testability
//!
//! This abstraction allows for dependency injection and easier testing
//! by enabling mock HTTP clients in tests. The directory clients and the
//! IP lookup location provider are all generic over [`AsyncHttpClient`].

use std::future::Future;

use thiserror::Error;
use tracing::{debug, trace, warn};

/// Default HTTP timeout for directory and location requests.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors that can occur during HTTP operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HttpError {
    /// Failed to construct the underlying client.
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),

    /// The request could not be sent or the response body not read.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server returned a non-success HTTP status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
}

/// Trait for asynchronous HTTP client operations.
///
/// Implementors perform a single GET request and return the raw response
/// body; status and wire-format interpretation belong to the caller.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an async HTTP GET request.
    ///
    /// Returns the response body as bytes, or an error for transport
    /// failures and non-success HTTP statuses.
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;
}

/// Real HTTP client implementation using reqwest.
///
/// Uses a reusable `reqwest::Client` with connection pooling and a
/// request timeout.
#[derive(Clone)]
pub struct AsyncReqwestClient {
    client: reqwest::Client,
}

impl AsyncReqwestClient {
    /// Creates a new client with the default timeout.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new client with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| HttpError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }
}

impl AsyncHttpClient for AsyncReqwestClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        trace!(url = url, "HTTP GET request starting");

        let response = match self.client.get(url).send().await {
            Ok(resp) => {
                debug!(
                    url = url,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                resp
            }
            Err(e) => {
                warn!(
                    url = url,
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                return Err(HttpError::RequestFailed(e.to_string()));
            }
        };

        if !response.status().is_success() {
            warn!(
                url = url,
                status = response.status().as_u16(),
                "HTTP error status"
            );
            return Err(HttpError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        match response.bytes().await {
            Ok(bytes) => {
                trace!(url = url, bytes = bytes.len(), "HTTP response body read");
                Ok(bytes.to_vec())
            }
            Err(e) => {
                warn!(url = url, error = %e, "Failed to read response body");
                Err(HttpError::RequestFailed(e.to_string()))
            }
        }
    }
}
