//! Error types for places directory operations.

use thiserror::Error;

use super::filter::FilterError;

/// Errors that can occur when querying the places directory.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DirectoryError {
    /// The filter failed validation before any request was issued.
    #[error("Invalid category filter: {0}")]
    InvalidFilter(#[from] FilterError),

    /// The proximity search did not succeed.
    ///
    /// Carries the directory status or transport failure; never silently
    /// coerced into an empty result set.
    #[error("Search failed: {reason}")]
    SearchFailed { reason: String },

    /// The detail fetch for one result did not succeed.
    #[error("Detail fetch failed for {id}: {reason}")]
    DetailFetchFailed { id: String, reason: String },
}
