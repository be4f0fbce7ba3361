//! Admin Directory HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use glsync_core::{DirectoryAccount, DirectorySource, SyncError, SyncResult};

use crate::auth::{DirectoryCredentials, TokenCache};
use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, DirectoryResult};

/// Error body returned by Google APIs.
#[derive(Debug, Deserialize)]
struct GoogleApiError {
    error: GoogleApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleApiErrorBody {
    message: String,
}

/// One page of the paginated user listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersPage {
    /// Users on this page. Absent in an empty domain.
    #[serde(default)]
    pub users: Vec<DirectoryUser>,
    /// Token for the next page, when more results exist.
    pub next_page_token: Option<String>,
}

/// A directory user, reduced to the fields the reconciliation reads.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryUser {
    /// Primary email address.
    pub primary_email: String,
    /// Custom schema attributes, keyed by schema then field name.
    #[serde(default)]
    pub custom_schemas: Option<serde_json::Value>,
}

impl DirectoryUser {
    /// Dig the target-system username out of the custom schemas.
    ///
    /// Absent schema, absent field, or an empty value all yield `None`;
    /// such accounts are excluded from the expected membership.
    #[must_use]
    pub fn external_username(&self, schema: &str, field: &str) -> Option<&str> {
        self.custom_schemas
            .as_ref()?
            .get(schema)?
            .get(field)?
            .as_str()
            .filter(|s| !s.is_empty())
    }
}

/// Admin Directory API client.
#[derive(Debug)]
pub struct DirectoryClient {
    config: DirectoryConfig,
    http_client: reqwest::Client,
    tokens: TokenCache,
}

impl DirectoryClient {
    /// Create a new directory client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(
        config: DirectoryConfig,
        credentials: DirectoryCredentials,
    ) -> DirectoryResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DirectoryError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self::with_http_client(config, credentials, http_client))
    }

    /// Create a client with a pre-built `reqwest::Client` (for testing).
    #[must_use]
    pub fn with_http_client(
        config: DirectoryConfig,
        credentials: DirectoryCredentials,
        http_client: reqwest::Client,
    ) -> Self {
        Self {
            tokens: TokenCache::new(credentials, http_client.clone()),
            config,
            http_client,
        }
    }

    /// The client's configuration.
    #[must_use]
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// List every active (non-suspended) user in the customer scope,
    /// following `nextPageToken` to exhaustion.
    pub async fn list_active_users(&self) -> DirectoryResult<Vec<DirectoryUser>> {
        let mut users = Vec::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0_u32;

        loop {
            let page: UsersPage = self.get_users_page(page_token.as_deref()).await?;
            pages += 1;
            users.extend(page.users);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        debug!(users = users.len(), pages, "listed active directory users");
        Ok(users)
    }

    async fn get_users_page(&self, page_token: Option<&str>) -> DirectoryResult<UsersPage> {
        let url = format!("{}/users", self.config.base_url);
        let page_size = self.config.page_size.to_string();
        let mut query: Vec<(&str, &str)> = vec![
            ("customer", self.config.customer_id.as_str()),
            ("query", "isSuspended=false"),
            ("projection", "full"),
            ("maxResults", page_size.as_str()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        self.get(&url, &query).await
    }

    /// Perform an authenticated GET, mapping non-success statuses to
    /// [`DirectoryError::Api`].
    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> DirectoryResult<T> {
        let token = self.tokens.access_token().await?;
        let response = self
            .http_client
            .get(url)
            .query(query)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GoogleApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(DirectoryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl DirectorySource for DirectoryClient {
    async fn list_active_accounts(&self) -> SyncResult<Vec<DirectoryAccount>> {
        let users = self.list_active_users().await.map_err(SyncError::directory)?;
        Ok(users
            .iter()
            .map(|user| DirectoryAccount {
                username: user
                    .external_username(&self.config.custom_schema, &self.config.username_field)
                    .map(str::to_string),
                email: user.primary_email.clone(),
            })
            .collect())
    }
}
