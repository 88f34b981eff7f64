//! NearScout - nearby point-of-interest discovery
//!
//! This library locates a user, discovers nearby points of interest
//! (police stations, mental-health centers, psychiatrists) from a places
//! directory, and lazily enriches a selected result with details.
//!
//! # High-Level API
//!
//! The [`session`] module provides the caller-facing controller:
//!
//! ```ignore
//! use nearscout::directory::{CategoryFilter, Category};
//! use nearscout::session::DiscoverySession;
//!
//! let session = DiscoverySession::new(location, search, details);
//! session.start(&CategoryFilter::for_category(Category::Police)).await?;
//!
//! session.select_result("place-id").await?;
//! let snapshot = session.snapshot();
//! ```
//!
//! The three capabilities (location, proximity search, detail lookup) are
//! injected as trait implementations; nothing is reached through ambient
//! global state.

pub mod coord;
pub mod directory;
pub mod location;
pub mod logging;
pub mod session;

/// Version of the NearScout library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
