//! Directory result types.
//!
//! [`ResultSummary`] is the lightweight outcome of a proximity search;
//! [`ResultDetail`] carries the enriched attributes fetched on demand for
//! one selected summary.

use crate::coord::Coordinate;

/// Lightweight result from a proximity search.
///
/// Identity is the `id` (the directory's stable identifier); ordering is
/// directory-defined and not contractually meaningful.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    /// Opaque stable directory identifier.
    pub id: String,

    /// Where the point of interest is.
    pub coordinate: Coordinate,

    /// Reference to a presentation asset (marker icon URL).
    ///
    /// Carried through for the presentation layer; never dereferenced by
    /// this crate.
    pub icon: Option<String>,
}

/// Enriched attributes for one selected result.
///
/// Merges onto the matching [`ResultSummary`]'s slot; the summary's
/// coordinate is never replaced by a detail fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultDetail {
    /// The summary's directory identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Formatted street address.
    pub formatted_address: String,

    /// Phone number, when the directory has one.
    pub phone_number: Option<String>,

    /// Rating on a 0.0 to 5.0 scale, when available.
    pub rating: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_identity_is_id() {
        let coord = Coordinate::new(40.0, -73.0).unwrap();
        let a = ResultSummary {
            id: "p1".to_string(),
            coordinate: coord,
            icon: None,
        };
        let b = ResultSummary {
            id: "p1".to_string(),
            coordinate: coord,
            icon: None,
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_detail_optional_fields() {
        let detail = ResultDetail {
            id: "p1".to_string(),
            name: "Station 1".to_string(),
            formatted_address: "1 Main St".to_string(),
            phone_number: None,
            rating: None,
        };
        assert!(detail.phone_number.is_none());
        assert!(detail.rating.is_none());
    }
}
