//! Geographic coordinate module
//!
//! Provides the validated [`Coordinate`] type produced by location
//! resolution and consumed by proximity searches.

mod types;

pub use types::{CoordError, Coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
