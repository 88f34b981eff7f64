//! Core state types for a discovery session.
//!
//! - [`SessionPhase`] - where the session is in its lifecycle
//! - [`Selection`] - the orthogonal selection slot within `Ready`
//! - [`SessionSnapshot`] - the complete view state for consumers

use crate::coord::Coordinate;
use crate::directory::{ResultDetail, ResultSummary};
use crate::location::LocationError;

/// Lifecycle phase of a discovery session.
///
/// Failures are carried in the phase so they are part of the view state,
/// distinguishable from a successful search with zero results.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionPhase {
    /// Session created, nothing started yet.
    #[default]
    Idle,

    /// Location resolution (and the search that follows it) in flight.
    LocatingUser,

    /// Location resolution failed; terminal unless the caller restarts.
    ///
    /// No fallback coordinate is substituted for a real failure.
    LocationFailed(LocationError),

    /// The proximity search returned a non-success status.
    SearchFailed {
        /// Directory status or transport failure description.
        reason: String,
    },

    /// Location resolved and search completed; results are available.
    Ready,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::LocatingUser => write!(f, "LocatingUser"),
            Self::LocationFailed(_) => write!(f, "LocationFailed"),
            Self::SearchFailed { .. } => write!(f, "SearchFailed"),
            Self::Ready => write!(f, "Ready"),
        }
    }
}

/// The selection slot within a `Ready` session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    None,

    /// A result was selected and its detail fetch is outstanding.
    Pending {
        /// Identifier the outstanding fetch was issued for.
        id: String,
    },

    /// The selected result's enriched detail.
    Resolved(ResultDetail),
}

impl Selection {
    /// Identifier of the current selection, if any.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Pending { id } => Some(id),
            Self::Resolved(detail) => Some(&detail.id),
        }
    }

    /// The resolved detail, if the selection has one.
    pub fn detail(&self) -> Option<&ResultDetail> {
        match self {
            Self::Resolved(detail) => Some(detail),
            _ => None,
        }
    }
}

/// Complete view state of one discovery session.
///
/// Exactly one snapshot stream exists per session; it is owned and
/// mutated exclusively by the session controller.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionSnapshot {
    /// Lifecycle phase (carries location/search failures).
    pub phase: SessionPhase,

    /// Resolved coordinate, `None` until resolution completes.
    pub coordinate: Option<Coordinate>,

    /// Result set, empty until a search completes.
    ///
    /// Stored in the order the directory returned them; identity is the
    /// summary id and ordering carries no meaning.
    pub results: Vec<ResultSummary>,

    /// Current selection slot.
    pub selection: Selection,
}

impl SessionSnapshot {
    /// Snapshot of a freshly created session.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Whether the result set contains the given identifier.
    pub fn contains_result(&self, id: &str) -> bool {
        self.results.iter().any(|summary| summary.id == id)
    }

    /// Convenience accessor for the resolved selection detail.
    pub fn selected_detail(&self) -> Option<&ResultDetail> {
        self.selection.detail()
    }
}
