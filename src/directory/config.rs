//! Configuration for the places directory clients.

/// Default base URL of the places directory web service.
pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Configuration shared by the search and detail clients.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// API key sent with every request.
    pub api_key: String,

    /// Base URL of the directory web service.
    pub base_url: String,
}

impl DirectoryConfig {
    /// Creates a config for the default directory with the given API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_PLACES_BASE_URL.to_string(),
        }
    }

    /// Overrides the base URL (useful for test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
