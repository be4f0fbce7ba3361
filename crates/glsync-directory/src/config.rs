//! Directory client configuration.

use serde::Deserialize;

/// Configuration for the Admin Directory client.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// Workspace customer/tenant id (e.g. `C01234567`, or `my_customer`).
    pub customer_id: String,

    /// Base URL of the Directory API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Custom schema holding the external-service attributes.
    #[serde(default = "default_custom_schema")]
    pub custom_schema: String,

    /// Field inside the custom schema naming the target-system username.
    #[serde(default = "default_username_field")]
    pub username_field: String,

    /// Page size for user listing. 500 is the API maximum.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_base_url() -> String {
    "https://admin.googleapis.com/admin/directory/v1".to_string()
}

fn default_custom_schema() -> String {
    "External_Services".to_string()
}

fn default_username_field() -> String {
    "GitLab_username".to_string()
}

fn default_page_size() -> u32 {
    500
}

impl DirectoryConfig {
    /// Configuration with defaults for everything but the customer id.
    #[must_use]
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            base_url: default_base_url(),
            custom_schema: default_custom_schema(),
            username_field: default_username_field(),
            page_size: default_page_size(),
        }
    }

    /// Override the base URL (used against mock servers in tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
