//! Proximity search against the places directory.
//!
//! The [`ProximitySearch`] trait abstracts the search capability so the
//! session controller can be tested without a live directory. The
//! [`PlacesSearchClient`] implementation issues one Nearby Search request
//! and maps the directory's status field onto the crate's error taxonomy.
//!
//! # Status Handling
//!
//! - `OK` - summaries are returned in the order the directory sent them
//! - `ZERO_RESULTS` - a valid successful outcome with an empty set
//! - anything else - [`DirectoryError::SearchFailed`], never a silently
//!   empty result set

use std::future::Future;

use reqwest::Url;
use serde::Deserialize;

use super::config::DirectoryConfig;
use super::error::DirectoryError;
use super::filter::CategoryFilter;
use super::http::AsyncHttpClient;
use super::types::ResultSummary;
use crate::coord::Coordinate;

/// Directory status for a successful search.
const STATUS_OK: &str = "OK";

/// Directory status for a successful search with no matches.
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Trait for category-filtered proximity searches.
///
/// A single call exhausts the operation: no retry, no pagination
/// follow-up.
pub trait ProximitySearch: Send + Sync {
    /// Searches the directory for entities matching `filter` within its
    /// radius of `origin`.
    ///
    /// `origin` must be a resolved coordinate; the session controller
    /// guarantees this by only issuing searches after location
    /// resolution.
    fn search(
        &self,
        origin: Coordinate,
        filter: &CategoryFilter,
    ) -> impl Future<Output = Result<Vec<ResultSummary>, DirectoryError>> + Send;
}

/// Nearby Search wire response.
///
/// These are our own types, decoupled from any third-party crate. Only
/// the fields this crate consumes are deserialized; everything else the
/// directory sends is ignored.
#[derive(Deserialize)]
struct SearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<WireSummary>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Deserialize)]
struct WireSummary {
    place_id: String,
    geometry: WireGeometry,
    #[serde(default)]
    icon: Option<String>,
}

#[derive(Deserialize)]
struct WireGeometry {
    location: WireLocation,
}

#[derive(Deserialize)]
struct WireLocation {
    lat: f64,
    lng: f64,
}

/// Places directory search client.
///
/// Generic over the HTTP client for dependency injection and testing.
pub struct PlacesSearchClient<C: AsyncHttpClient> {
    http: C,
    config: DirectoryConfig,
}

impl<C: AsyncHttpClient> PlacesSearchClient<C> {
    /// Creates a new search client.
    pub fn new(http: C, config: DirectoryConfig) -> Self {
        Self { http, config }
    }

    /// Builds the Nearby Search URL for the given origin and filter.
    ///
    /// Query values are form-encoded, so free-text keywords with reserved
    /// characters reach the directory intact instead of splitting the
    /// query string.
    fn build_url(
        &self,
        origin: Coordinate,
        filter: &CategoryFilter,
    ) -> Result<String, DirectoryError> {
        let mut url = Url::parse(&format!("{}/nearbysearch/json", self.config.base_url)).map_err(
            |e| DirectoryError::SearchFailed {
                reason: format!("Invalid directory base URL: {}", e),
            },
        )?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair(
                "location",
                &format!("{},{}", origin.latitude, origin.longitude),
            );
            query.append_pair("radius", &filter.radius_meters.to_string());
            query.append_pair("key", &self.config.api_key);
            if !filter.types.is_empty() {
                query.append_pair("type", &filter.types.join("|"));
            }
            if let Some(keyword) = filter.keyword.as_deref() {
                if !keyword.is_empty() {
                    query.append_pair("keyword", keyword);
                }
            }
        }

        Ok(url.into())
    }
}

impl<C: AsyncHttpClient> ProximitySearch for PlacesSearchClient<C> {
    async fn search(
        &self,
        origin: Coordinate,
        filter: &CategoryFilter,
    ) -> Result<Vec<ResultSummary>, DirectoryError> {
        // Fail fast before any request reaches the wire
        filter.validate()?;

        let url = self.build_url(origin, filter)?;
        let bytes = self
            .http
            .get(&url)
            .await
            .map_err(|e| DirectoryError::SearchFailed {
                reason: e.to_string(),
            })?;

        let response: SearchResponse =
            serde_json::from_slice(&bytes).map_err(|e| DirectoryError::SearchFailed {
                reason: format!("Failed to parse response: {}", e),
            })?;

        match response.status.as_str() {
            STATUS_OK => {
                let summaries = response
                    .results
                    .into_iter()
                    .map(|wire| {
                        let coordinate =
                            Coordinate::new(wire.geometry.location.lat, wire.geometry.location.lng)
                                .map_err(|e| DirectoryError::SearchFailed {
                                    reason: format!("Invalid coordinate in response: {}", e),
                                })?;
                        Ok(ResultSummary {
                            id: wire.place_id,
                            coordinate,
                            icon: wire.icon,
                        })
                    })
                    .collect::<Result<Vec<_>, DirectoryError>>()?;

                tracing::debug!(count = summaries.len(), "Proximity search succeeded");
                Ok(summaries)
            }
            STATUS_ZERO_RESULTS => {
                tracing::debug!("Proximity search matched nothing");
                Ok(Vec::new())
            }
            status => {
                let reason = match response.error_message {
                    Some(message) => format!("{}: {}", status, message),
                    None => status.to_string(),
                };
                tracing::warn!(status, "Proximity search returned non-success status");
                Err(DirectoryError::SearchFailed { reason })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::filter::{Category, FilterError};
    use super::super::http::tests::MockAsyncHttpClient;
    use super::*;

    fn origin() -> Coordinate {
        Coordinate::new(40.0, -73.0).unwrap()
    }

    fn client(body: &str) -> (PlacesSearchClient<MockAsyncHttpClient>, MockAsyncHttpClient) {
        let mock = MockAsyncHttpClient::ok(body);
        let client = PlacesSearchClient::new(mock.clone(), DirectoryConfig::with_api_key("test"));
        (client, mock)
    }

    fn two_station_response() -> &'static str {
        r#"{
            "status": "OK",
            "results": [
                {
                    "place_id": "p1",
                    "geometry": {"location": {"lat": 40.01, "lng": -73.01}},
                    "icon": "https://maps.google.com/mapfiles/ms/icons/police.png"
                },
                {
                    "place_id": "p2",
                    "geometry": {"location": {"lat": 40.02, "lng": -73.02}}
                }
            ]
        }"#
    }

    #[test]
    fn test_url_construction() {
        let (client, _mock) = client("{}");
        let filter = CategoryFilter::for_category(Category::Police);

        let url = client.build_url(origin(), &filter).unwrap();
        assert_eq!(
            url,
            "https://maps.googleapis.com/maps/api/place/nearbysearch/json?location=40%2C-73&radius=50000&key=test&type=police"
        );
    }

    #[test]
    fn test_url_includes_encoded_keyword() {
        let (client, _mock) = client("{}");
        let filter = CategoryFilter::for_category(Category::MentalHealth);

        let url = client.build_url(origin(), &filter).unwrap();
        assert!(url.contains("&type=health"));
        assert!(url.contains("&keyword=mental+health"));
    }

    #[test]
    fn test_url_escapes_reserved_keyword_characters() {
        let (client, _mock) = client("{}");
        let filter = CategoryFilter::new(
            500,
            vec![],
            Some("crisis & trauma center".to_string()),
        );

        let url = client.build_url(origin(), &filter).unwrap();
        // A raw '&' would split the parameter and truncate the keyword
        assert!(url.contains("&keyword=crisis+%26+trauma+center"));
        assert!(!url.contains("keyword=crisis & "));
    }

    #[test]
    fn test_url_escapes_non_ascii_keyword() {
        let (client, _mock) = client("{}");
        let filter = CategoryFilter::new(500, vec![], Some("klinikk psykiatri Ø".to_string()));

        let url = client.build_url(origin(), &filter).unwrap();
        assert!(url.contains("keyword=klinikk+psykiatri+%C3%98"));
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_search_failed() {
        let mock = MockAsyncHttpClient::ok("{}");
        let client = PlacesSearchClient::new(
            mock.clone(),
            DirectoryConfig::with_api_key("test").with_base_url("not a url"),
        );
        let filter = CategoryFilter::for_category(Category::Police);

        let result = client.search(origin(), &filter).await;
        assert!(matches!(result, Err(DirectoryError::SearchFailed { .. })));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_search_ok_returns_summaries_in_order() {
        let (client, _mock) = client(two_station_response());
        let filter = CategoryFilter::for_category(Category::Police);

        let summaries = client.search(origin(), &filter).await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, "p1");
        assert_eq!(summaries[1].id, "p2");
        assert!((summaries[0].coordinate.latitude - 40.01).abs() < 1e-9);
        assert!(summaries[0].icon.is_some());
        assert!(summaries[1].icon.is_none());
    }

    #[tokio::test]
    async fn test_search_zero_results_is_empty_success() {
        let (client, _mock) = client(r#"{"status": "ZERO_RESULTS", "results": []}"#);
        let filter = CategoryFilter::for_category(Category::Police);

        let summaries = client.search(origin(), &filter).await.unwrap();
        assert!(summaries.is_empty());
    }

    #[tokio::test]
    async fn test_search_denied_status_fails() {
        let (client, _mock) = client(r#"{"status": "REQUEST_DENIED", "error_message": "bad key"}"#);
        let filter = CategoryFilter::for_category(Category::Police);

        let result = client.search(origin(), &filter).await;
        match result {
            Err(DirectoryError::SearchFailed { reason }) => {
                assert!(reason.contains("REQUEST_DENIED"));
                assert!(reason.contains("bad key"));
            }
            other => panic!("Expected SearchFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_invalid_filter_fails_without_request() {
        let (client, mock) = client(two_station_response());
        let filter = CategoryFilter::for_category(Category::Police).with_radius(0);

        let result = client.search(origin(), &filter).await;
        assert_eq!(
            result,
            Err(DirectoryError::InvalidFilter(FilterError::NonPositiveRadius))
        );
        assert_eq!(mock.call_count(), 0, "No request must reach the wire");
    }

    #[tokio::test]
    async fn test_search_unconstrained_filter_fails_without_request() {
        let (client, mock) = client(two_station_response());
        let filter = CategoryFilter::new(500, vec![], None);

        let result = client.search(origin(), &filter).await;
        assert_eq!(
            result,
            Err(DirectoryError::InvalidFilter(FilterError::Unconstrained))
        );
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_search_malformed_body_fails() {
        let (client, _mock) = client("not json");
        let filter = CategoryFilter::for_category(Category::Police);

        let result = client.search(origin(), &filter).await;
        assert!(matches!(result, Err(DirectoryError::SearchFailed { .. })));
    }

    #[tokio::test]
    async fn test_search_transport_error_surfaces_as_search_failed() {
        let mock = MockAsyncHttpClient::err(super::super::http::HttpError::RequestFailed(
            "connection refused".to_string(),
        ));
        let client = PlacesSearchClient::new(mock, DirectoryConfig::with_api_key("test"));
        let filter = CategoryFilter::for_category(Category::Police);

        let result = client.search(origin(), &filter).await;
        match result {
            Err(DirectoryError::SearchFailed { reason }) => {
                assert!(reason.contains("connection refused"));
            }
            other => panic!("Expected SearchFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_tolerates_extra_response_fields() {
        let (client, _mock) = client(
            r#"{
                "html_attributions": [],
                "status": "OK",
                "results": [
                    {
                        "place_id": "p1",
                        "name": "Station 1",
                        "vicinity": "1 Main St",
                        "geometry": {
                            "location": {"lat": 40.01, "lng": -73.01},
                            "viewport": {}
                        },
                        "types": ["police", "point_of_interest"]
                    }
                ]
            }"#,
        );
        let filter = CategoryFilter::for_category(Category::Police);

        let summaries = client.search(origin(), &filter).await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "p1");
    }
}
