//! GitLab client configuration.

use serde::Deserialize;

/// Configuration for the GitLab client.
#[derive(Clone, Deserialize)]
pub struct GitlabConfig {
    /// Private/personal access token with `api` scope.
    pub token: String,

    /// Instance base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page size for member listing. 100 is the API maximum.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_base_url() -> String {
    "https://gitlab.com".to_string()
}

fn default_per_page() -> u32 {
    100
}

impl GitlabConfig {
    /// Configuration for gitlab.com with the given token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: default_base_url(),
            per_page: default_per_page(),
        }
    }

    /// Override the instance base URL (self-hosted instances, mock servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl std::fmt::Debug for GitlabConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitlabConfig")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("per_page", &self.per_page)
            .finish()
    }
}
