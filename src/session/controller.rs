//! Discovery session controller.
//!
//! [`DiscoverySession`] owns the session's view state and sequences the
//! three injected capabilities: location resolution, proximity search,
//! and on-demand detail enrichment.
//!
//! # Ordering
//!
//! Location resolution completes (success or failure) before a search is
//! issued; a search never runs against an unresolved coordinate.
//!
//! # Last-Write-Wins Selection
//!
//! Each outstanding detail fetch is tagged with the selection epoch it
//! was issued under. At completion the epoch is compared against the
//! current one; a stale response for a superseded selection is discarded
//! instead of committed. There is no cancellation of the underlying
//! request, only the discard rule.
//!
//! # Locking
//!
//! State lives behind a `std::sync::Mutex` with short critical sections;
//! the lock is never held across an await point.

use std::sync::Mutex;

use tokio::sync::watch;

use super::error::SessionError;
use super::state::{Selection, SessionPhase, SessionSnapshot};
use crate::coord::Coordinate;
use crate::directory::{CategoryFilter, DetailLookup, ProximitySearch};
use crate::location::LocationProvider;

/// State guarded by the controller's mutex.
struct Inner {
    snapshot: SessionSnapshot,
    /// Bumped on every selection change; outstanding fetches carry the
    /// epoch they were issued under.
    selection_epoch: u64,
}

/// The discovery session controller.
///
/// Generic over the three capability traits so tests (and alternative
/// directories) can inject their own implementations.
pub struct DiscoverySession<L, S, D> {
    location: L,
    search: S,
    details: D,
    inner: Mutex<Inner>,
    watch_tx: watch::Sender<SessionSnapshot>,
}

impl<L, S, D> DiscoverySession<L, S, D>
where
    L: LocationProvider,
    S: ProximitySearch,
    D: DetailLookup,
{
    /// Creates an idle session with injected capabilities.
    pub fn new(location: L, search: S, details: D) -> Self {
        let snapshot = SessionSnapshot::idle();
        let (watch_tx, _) = watch::channel(snapshot.clone());

        Self {
            location,
            search,
            details,
            inner: Mutex::new(Inner {
                snapshot,
                selection_epoch: 0,
            }),
            watch_tx,
        }
    }

    /// Current view state.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.lock().unwrap().snapshot.clone()
    }

    /// Subscribes to view state updates.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.watch_tx.subscribe()
    }

    /// Starts (or restarts) the session: resolve the user's position,
    /// then search the directory around it.
    ///
    /// On location failure the session ends in
    /// [`SessionPhase::LocationFailed`] and no search is issued. On
    /// search failure it ends in [`SessionPhase::SearchFailed`]. Both are
    /// also returned as the error.
    pub async fn start(&self, filter: &CategoryFilter) -> Result<(), SessionError> {
        self.mutate(|inner| {
            inner.snapshot.phase = SessionPhase::LocatingUser;
            inner.snapshot.coordinate = None;
            inner.snapshot.results.clear();
            inner.snapshot.selection = Selection::None;
            inner.selection_epoch += 1;
        });
        tracing::info!("Discovery session started");

        let coordinate = match self.location.resolve().await {
            Ok(coordinate) => coordinate,
            Err(e) => {
                tracing::warn!(error = %e, "Location resolution failed");
                self.mutate(|inner| {
                    inner.snapshot.phase = SessionPhase::LocationFailed(e.clone());
                });
                return Err(e.into());
            }
        };

        self.mutate(|inner| {
            inner.snapshot.coordinate = Some(coordinate);
        });
        tracing::debug!(%coordinate, "Position resolved, searching directory");

        self.run_search(coordinate, filter).await
    }

    /// Re-runs the search with a new filter, re-using the resolved
    /// coordinate.
    ///
    /// Valid once a coordinate has been resolved; any selection is
    /// cleared because the result set is replaced.
    pub async fn rerun_search(&self, filter: &CategoryFilter) -> Result<(), SessionError> {
        let coordinate = {
            let mut inner = self.inner.lock().unwrap();
            let coordinate = inner.snapshot.coordinate.ok_or(SessionError::NotLocated)?;
            inner.snapshot.selection = Selection::None;
            inner.selection_epoch += 1;
            self.watch_tx.send_replace(inner.snapshot.clone());
            coordinate
        };

        self.run_search(coordinate, filter).await
    }

    /// Issues one proximity search and commits the outcome.
    async fn run_search(
        &self,
        coordinate: Coordinate,
        filter: &CategoryFilter,
    ) -> Result<(), SessionError> {
        match self.search.search(coordinate, filter).await {
            Ok(results) => {
                tracing::info!(count = results.len(), "Search completed");
                self.mutate(|inner| {
                    inner.snapshot.phase = SessionPhase::Ready;
                    inner.snapshot.results = results;
                    inner.snapshot.selection = Selection::None;
                });
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Search failed");
                self.mutate(|inner| {
                    inner.snapshot.phase = SessionPhase::SearchFailed {
                        reason: e.to_string(),
                    };
                });
                Err(e.into())
            }
        }
    }

    /// Selects one result and fetches its enriched detail.
    ///
    /// Selecting outside the `Ready` phase fails with
    /// [`SessionError::NotReady`]; an id outside the current result set
    /// with [`SessionError::UnknownResult`].
    ///
    /// A newer selection supersedes this call's eventual response: the
    /// stale response is discarded and the superseded call returns
    /// `Ok(())`. A failed fetch for the current selection restores the
    /// prior selection value and returns the error; it never clears or
    /// corrupts existing results.
    pub async fn select_result(&self, id: &str) -> Result<(), SessionError> {
        let (prior, my_epoch) = {
            let mut inner = self.inner.lock().unwrap();
            if inner.snapshot.phase != SessionPhase::Ready {
                return Err(SessionError::NotReady);
            }
            if !inner.snapshot.contains_result(id) {
                return Err(SessionError::UnknownResult(id.to_string()));
            }

            let prior = std::mem::replace(
                &mut inner.snapshot.selection,
                Selection::Pending { id: id.to_string() },
            );
            inner.selection_epoch += 1;
            let my_epoch = inner.selection_epoch;
            self.watch_tx.send_replace(inner.snapshot.clone());
            (prior, my_epoch)
        };
        tracing::debug!(id, epoch = my_epoch, "Detail fetch issued");

        let outcome = self.details.fetch_details(id).await;

        let mut inner = self.inner.lock().unwrap();
        if inner.selection_epoch != my_epoch {
            // Superseded by a newer selection; the stale response is
            // never committed, success or failure.
            tracing::debug!(id, epoch = my_epoch, "Stale detail response discarded");
            return Ok(());
        }

        match outcome {
            Ok(detail) => {
                inner.snapshot.selection = Selection::Resolved(detail);
                self.watch_tx.send_replace(inner.snapshot.clone());
                Ok(())
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "Detail fetch failed");
                inner.snapshot.selection = prior;
                self.watch_tx.send_replace(inner.snapshot.clone());
                Err(e.into())
            }
        }
    }

    /// Clears the selection; the result set is unaffected.
    ///
    /// Also supersedes any outstanding detail fetch.
    pub fn clear_selection(&self) {
        self.mutate(|inner| {
            inner.snapshot.selection = Selection::None;
            inner.selection_epoch += 1;
        });
        tracing::debug!("Selection cleared");
    }

    /// Applies a state mutation and publishes the new snapshot.
    fn mutate(&self, f: impl FnOnce(&mut Inner)) {
        let mut inner = self.inner.lock().unwrap();
        f(&mut inner);
        self.watch_tx.send_replace(inner.snapshot.clone());
    }
}
