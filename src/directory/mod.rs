//! Places directory abstraction
//!
//! This module provides traits and implementations for querying an
//! external places directory: a category-filtered proximity search and an
//! on-demand detail fetch for one selected result.
//!
//! Both concrete clients are generic over [`AsyncHttpClient`] so a mock
//! client can be injected in tests; nothing is looked up from ambient
//! global state.

mod config;
mod details;
mod error;
mod filter;
mod http;
mod search;
mod types;

pub use config::{DirectoryConfig, DEFAULT_PLACES_BASE_URL};
pub use details::{DetailLookup, PlacesDetailClient};
pub use error::DirectoryError;
pub use filter::{
    Category, CategoryFilter, FilterError, DEFAULT_SEARCH_RADIUS_METERS, USER_MARKER_ICON_URL,
};
pub use http::{AsyncHttpClient, AsyncReqwestClient, HttpError};
pub use search::{PlacesSearchClient, ProximitySearch};
pub use types::{ResultDetail, ResultSummary};

#[cfg(test)]
pub use http::tests::MockAsyncHttpClient;
