//! Session error types.

use thiserror::Error;

use crate::directory::DirectoryError;
use crate::location::LocationError;

/// Errors surfaced by the session controller.
///
/// None of these are retried automatically; retry and backoff policy is a
/// caller decision layered on top.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Location acquisition failed (also carried in the session phase).
    #[error(transparent)]
    Location(#[from] LocationError),

    /// A directory operation failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// The selected identifier is not in the current result set.
    #[error("No result with id {0} in the current result set")]
    UnknownResult(String),

    /// A selection was requested outside the `Ready` phase.
    #[error("Session has no result set to select from")]
    NotReady,

    /// A search was requested before a coordinate was resolved.
    #[error("Session has no resolved coordinate")]
    NotLocated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_location_error() {
        let err: SessionError = LocationError::CapabilityUnavailable.into();
        assert!(matches!(err, SessionError::Location(_)));
        assert_eq!(err.to_string(), "Location capability unavailable");
    }

    #[test]
    fn test_from_directory_error() {
        let err: SessionError = DirectoryError::SearchFailed {
            reason: "DENIED".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Search failed: DENIED");
    }

    #[test]
    fn test_not_ready_distinct_from_unknown_result() {
        assert_ne!(
            SessionError::NotReady,
            SessionError::UnknownResult("p1".to_string())
        );
        assert_eq!(
            SessionError::NotReady.to_string(),
            "Session has no result set to select from"
        );
    }

    #[test]
    fn test_unknown_result_display() {
        let err = SessionError::UnknownResult("p9".to_string());
        assert!(err.to_string().contains("p9"));
    }
}
