//! Runtime configuration for the listings client
//!
//! Holds the upstream endpoint and the image used for shows that come back
//! without any artwork. The binary fills this from CLI flags and environment
//! variables; library users construct it directly.

/// Base URL of the public TVMaze API
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Image shown for shows the upstream source has no artwork for
pub const DEFAULT_IMAGE_URL: &str =
    "https://www.southwestjournal.com/wp-content/uploads/2018/11/shutterstock_1075355216.jpg";

/// Configuration shared by the listings provider and the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    /// API base URL, stored without a trailing slash
    base_url: String,
    /// Fallback image URL for shows without artwork
    default_image: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_image: DEFAULT_IMAGE_URL.to_string(),
        }
    }
}

impl BrowserConfig {
    /// Overrides the API base URL
    ///
    /// Trailing slashes are stripped so endpoint paths can be appended as
    /// `{base}/search/shows`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the fallback image URL
    ///
    /// An empty value is ignored, since the fallback must always yield a
    /// usable image.
    pub fn with_default_image(mut self, default_image: impl Into<String>) -> Self {
        let default_image = default_image.into();
        if !default_image.trim().is_empty() {
            self.default_image = default_image;
        }
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_image(&self) -> &str {
        &self.default_image
    }
}
