//! Location provider trait.

use std::future::Future;

use super::error::LocationError;
use crate::coord::Coordinate;

/// Trait for one-shot acquisition of the user's current position.
///
/// A call resolves exactly one [`Coordinate`]; it does not repeat or
/// stream further updates. Implementations perform no automatic retry.
pub trait LocationProvider: Send + Sync {
    /// Requests a single current-position reading.
    fn resolve(&self) -> impl Future<Output = Result<Coordinate, LocationError>> + Send;
}
