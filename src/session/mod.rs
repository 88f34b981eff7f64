//! Discovery session orchestration
//!
//! This module owns the session view state and its transitions:
//!
//! ```text
//! Idle -> LocatingUser -> LocationFailed | SearchFailed | Ready
//! ```
//!
//! and, orthogonally within `Ready`, the selection slot:
//!
//! ```text
//! None <-> Pending <-> Resolved
//! ```
//!
//! The controller is re-enterable: a session in `Ready` may re-run its
//! search with a changed filter, re-using the resolved coordinate.

mod controller;
mod error;
mod state;

pub use controller::DiscoverySession;
pub use error::SessionError;
pub use state::{Selection, SessionPhase, SessionSnapshot};
