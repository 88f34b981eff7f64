//! Location acquisition
//!
//! One-shot resolution of the user's current coordinate. The
//! [`LocationProvider`] trait is the capability seam; the session
//! controller only ever consumes it, never configures the platform
//! underneath.

mod error;
mod ip_lookup;
mod provider;

pub use error::LocationError;
pub use ip_lookup::{IpLookupConfig, IpLookupLocationProvider, DEFAULT_IP_LOOKUP_URL};
pub use provider::LocationProvider;
