//! Error types for location acquisition.

use thiserror::Error;

/// Errors that can occur while resolving the user's position.
///
/// Both failures are terminal for that resolve attempt; retry policy, if
/// any, belongs to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    /// No location capability is available at all.
    #[error("Location capability unavailable")]
    CapabilityUnavailable,

    /// A capability is present but the position read failed or was denied.
    #[error("Location acquisition failed: {0}")]
    AcquisitionFailed(String),
}
