//! IP geolocation location provider.
//!
//! Resolves a coarse position from an IP geolocation web service. The
//! wire format follows the common `status`/`lat`/`lon` JSON shape; only
//! the fields this crate consumes are deserialized.

use serde::Deserialize;

use super::error::LocationError;
use super::provider::LocationProvider;
use crate::coord::Coordinate;
use crate::directory::AsyncHttpClient;

/// Default IP geolocation endpoint.
pub const DEFAULT_IP_LOOKUP_URL: &str = "http://ip-api.com/json";

/// Lookup service status for a successful read.
const STATUS_SUCCESS: &str = "success";

/// Configuration for the IP lookup provider.
#[derive(Debug, Clone)]
pub struct IpLookupConfig {
    /// Whether a lookup capability is configured at all.
    ///
    /// A disabled provider reports
    /// [`LocationError::CapabilityUnavailable`] without touching the
    /// network.
    pub enabled: bool,

    /// Lookup service endpoint.
    pub endpoint: String,
}

impl Default for IpLookupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_IP_LOOKUP_URL.to_string(),
        }
    }
}

/// Geolocation wire response.
#[derive(Deserialize)]
struct LookupResponse {
    status: String,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    message: Option<String>,
}

/// Location provider backed by an IP geolocation service.
///
/// Generic over the HTTP client for dependency injection and testing.
pub struct IpLookupLocationProvider<C: AsyncHttpClient> {
    http: C,
    config: IpLookupConfig,
}

impl<C: AsyncHttpClient> IpLookupLocationProvider<C> {
    /// Creates a provider against the default endpoint.
    pub fn new(http: C) -> Self {
        Self::with_config(http, IpLookupConfig::default())
    }

    /// Creates a provider with explicit configuration.
    pub fn with_config(http: C, config: IpLookupConfig) -> Self {
        Self { http, config }
    }
}

impl<C: AsyncHttpClient> LocationProvider for IpLookupLocationProvider<C> {
    async fn resolve(&self) -> Result<Coordinate, LocationError> {
        if !self.config.enabled {
            return Err(LocationError::CapabilityUnavailable);
        }

        let bytes = self
            .http
            .get(&self.config.endpoint)
            .await
            .map_err(|e| LocationError::AcquisitionFailed(e.to_string()))?;

        let response: LookupResponse = serde_json::from_slice(&bytes)
            .map_err(|e| LocationError::AcquisitionFailed(format!("Failed to parse response: {}", e)))?;

        if response.status != STATUS_SUCCESS {
            let reason = response
                .message
                .unwrap_or_else(|| format!("lookup status {}", response.status));
            tracing::warn!(reason = %reason, "IP lookup returned non-success status");
            return Err(LocationError::AcquisitionFailed(reason));
        }

        let (lat, lon) = match (response.lat, response.lon) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                return Err(LocationError::AcquisitionFailed(
                    "Response missing coordinates".to_string(),
                ))
            }
        };

        let coordinate = Coordinate::new(lat, lon)
            .map_err(|e| LocationError::AcquisitionFailed(e.to_string()))?;

        tracing::debug!(%coordinate, "Position resolved");
        Ok(coordinate)
    }
}
