//! Category filter configuration for proximity searches.

use thiserror::Error;

/// Default search radius in meters.
pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 50_000;

/// Marker icon for the user's own position.
///
/// Presentation asset reference only; the core never fetches it.
pub const USER_MARKER_ICON_URL: &str = "https://maps.google.com/mapfiles/ms/icons/blue-dot.png";

/// Supported point-of-interest categories.
///
/// Each category carries its directory type tag and presentation strings
/// as a lookup table, so the discovery flow itself stays
/// category-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Police stations.
    Police,
    /// Mental-health centers.
    MentalHealth,
    /// Psychiatrist practices.
    Psychiatrist,
}

impl Category {
    /// Directory type tag used in the proximity search request.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Police => "police",
            Self::MentalHealth => "health",
            Self::Psychiatrist => "doctor",
        }
    }

    /// Keyword refinement for categories the directory has no exact type for.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::Police => None,
            Self::MentalHealth => Some("mental health"),
            Self::Psychiatrist => Some("psychiatrist"),
        }
    }

    /// Human-readable label for headings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Police => "Police Stations",
            Self::MentalHealth => "Mental Health Centers",
            Self::Psychiatrist => "Psychiatrists",
        }
    }

    /// Marker icon for results of this category.
    pub fn marker_icon_url(&self) -> &'static str {
        match self {
            Self::Police => "https://maps.google.com/mapfiles/ms/icons/police.png",
            Self::MentalHealth => "https://maps.google.com/mapfiles/ms/icons/hospitals.png",
            Self::Psychiatrist => "https://maps.google.com/mapfiles/ms/icons/doctor.png",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors for under-constrained or invalid filters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Radius must be a positive number of meters.
    #[error("Search radius must be positive")]
    NonPositiveRadius,

    /// A search with neither types nor a keyword is under-constrained.
    #[error("At least one category type or a keyword is required")]
    Unconstrained,
}

/// Configuration for one proximity search.
///
/// Supplied by the caller per use case. At least one of `types` and
/// `keyword` must be non-empty, and the radius must be positive;
/// [`validate`](Self::validate) is checked before any request is issued.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryFilter {
    /// Search radius in meters (must be positive).
    pub radius_meters: u32,

    /// Directory category type tags.
    pub types: Vec<String>,

    /// Optional free-text refinement.
    pub keyword: Option<String>,
}

impl CategoryFilter {
    /// Creates a filter with explicit types and keyword.
    pub fn new(radius_meters: u32, types: Vec<String>, keyword: Option<String>) -> Self {
        Self {
            radius_meters,
            types,
            keyword,
        }
    }

    /// Creates a filter for one supported category at the default radius.
    pub fn for_category(category: Category) -> Self {
        Self {
            radius_meters: DEFAULT_SEARCH_RADIUS_METERS,
            types: vec![category.type_tag().to_string()],
            keyword: category.keyword().map(str::to_string),
        }
    }

    /// Overrides the search radius.
    pub fn with_radius(mut self, radius_meters: u32) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    /// Checks the filter invariants.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.radius_meters == 0 {
            return Err(FilterError::NonPositiveRadius);
        }
        let keyword_empty = self.keyword.as_deref().map_or(true, str::is_empty);
        if self.types.is_empty() && keyword_empty {
            return Err(FilterError::Unconstrained);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_category_police() {
        let filter = CategoryFilter::for_category(Category::Police);
        assert_eq!(filter.radius_meters, DEFAULT_SEARCH_RADIUS_METERS);
        assert_eq!(filter.types, vec!["police".to_string()]);
        assert_eq!(filter.keyword, None);
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn test_for_category_mental_health_has_keyword() {
        let filter = CategoryFilter::for_category(Category::MentalHealth);
        assert_eq!(filter.types, vec!["health".to_string()]);
        assert_eq!(filter.keyword.as_deref(), Some("mental health"));
    }

    #[test]
    fn test_for_category_psychiatrist() {
        let filter = CategoryFilter::for_category(Category::Psychiatrist);
        assert_eq!(filter.types, vec!["doctor".to_string()]);
        assert_eq!(filter.keyword.as_deref(), Some("psychiatrist"));
    }

    #[test]
    fn test_with_radius() {
        let filter = CategoryFilter::for_category(Category::Police).with_radius(1_000);
        assert_eq!(filter.radius_meters, 1_000);
    }

    #[test]
    fn test_zero_radius_invalid() {
        let filter = CategoryFilter::for_category(Category::Police).with_radius(0);
        assert_eq!(filter.validate(), Err(FilterError::NonPositiveRadius));
    }

    #[test]
    fn test_unconstrained_filter_invalid() {
        let filter = CategoryFilter::new(500, vec![], None);
        assert_eq!(filter.validate(), Err(FilterError::Unconstrained));

        let filter = CategoryFilter::new(500, vec![], Some(String::new()));
        assert_eq!(filter.validate(), Err(FilterError::Unconstrained));
    }

    #[test]
    fn test_keyword_only_filter_valid() {
        let filter = CategoryFilter::new(500, vec![], Some("crisis center".to_string()));
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Police.to_string(), "Police Stations");
        assert_eq!(Category::MentalHealth.to_string(), "Mental Health Centers");
        assert_eq!(Category::Psychiatrist.to_string(), "Psychiatrists");
    }

    #[test]
    fn test_marker_icons_distinct() {
        assert_ne!(
            Category::Police.marker_icon_url(),
            Category::MentalHealth.marker_icon_url()
        );
        assert_ne!(
            Category::Police.marker_icon_url(),
            USER_MARKER_ICON_URL
        );
    }
}
