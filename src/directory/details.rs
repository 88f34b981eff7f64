//! Detail enrichment for one selected result.
//!
//! The [`DetailLookup`] trait abstracts the on-demand detail capability.
//! [`PlacesDetailClient`] issues one Place Details request scoped to
//! exactly the fields this crate consumes; requesting a superset is out
//! of contract and wasteful.

use std::future::Future;

use serde::Deserialize;

use super::config::DirectoryConfig;
use super::error::DirectoryError;
use super::http::AsyncHttpClient;
use super::types::ResultDetail;

/// The exact fields requested from the directory.
const REQUESTED_FIELDS: &str = "name,formatted_address,formatted_phone_number,rating";

/// Directory status for a successful detail fetch.
const STATUS_OK: &str = "OK";

/// Trait for fetching enriched attributes of exactly one result.
///
/// `id` must correspond to a summary previously returned by a proximity
/// search within the same session; stale or foreign ids are a caller
/// error and are not validated here.
pub trait DetailLookup: Send + Sync {
    /// Fetches the detail record for one directory identifier.
    fn fetch_details(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<ResultDetail, DirectoryError>> + Send;
}

/// Place Details wire response.
///
/// Every detail field is optional on the wire: a subset response yields a
/// partial [`ResultDetail`] with absent optional fields.
#[derive(Deserialize)]
struct DetailResponse {
    status: String,
    #[serde(default)]
    result: Option<WireDetail>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Deserialize, Default)]
struct WireDetail {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    formatted_address: Option<String>,
    #[serde(default)]
    formatted_phone_number: Option<String>,
    #[serde(default)]
    rating: Option<f32>,
}

/// Places directory detail client.
///
/// Generic over the HTTP client for dependency injection and testing.
pub struct PlacesDetailClient<C: AsyncHttpClient> {
    http: C,
    config: DirectoryConfig,
}

impl<C: AsyncHttpClient> PlacesDetailClient<C> {
    /// Creates a new detail client.
    pub fn new(http: C, config: DirectoryConfig) -> Self {
        Self { http, config }
    }

    /// Builds the Place Details URL for one identifier.
    fn build_url(&self, id: &str) -> String {
        format!(
            "{}/details/json?place_id={}&fields={}&key={}",
            self.config.base_url, id, REQUESTED_FIELDS, self.config.api_key
        )
    }
}

impl<C: AsyncHttpClient> DetailLookup for PlacesDetailClient<C> {
    async fn fetch_details(&self, id: &str) -> Result<ResultDetail, DirectoryError> {
        let url = self.build_url(id);
        let bytes = self
            .http
            .get(&url)
            .await
            .map_err(|e| DirectoryError::DetailFetchFailed {
                id: id.to_string(),
                reason: e.to_string(),
            })?;

        let response: DetailResponse =
            serde_json::from_slice(&bytes).map_err(|e| DirectoryError::DetailFetchFailed {
                id: id.to_string(),
                reason: format!("Failed to parse response: {}", e),
            })?;

        if response.status != STATUS_OK {
            let reason = match response.error_message {
                Some(message) => format!("{}: {}", response.status, message),
                None => response.status,
            };
            tracing::warn!(id, reason = %reason, "Detail fetch returned non-success status");
            return Err(DirectoryError::DetailFetchFailed {
                id: id.to_string(),
                reason,
            });
        }

        let wire = response.result.unwrap_or_default();
        tracing::debug!(id, "Detail fetch succeeded");

        Ok(ResultDetail {
            id: id.to_string(),
            name: wire.name.unwrap_or_default(),
            formatted_address: wire.formatted_address.unwrap_or_default(),
            phone_number: wire.formatted_phone_number,
            rating: wire.rating,
        })
    }
}
