//! GitLab REST v4 client.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use glsync_core::{
    AccessLevel, GroupHandle, GroupMember, GroupService, MemberId, SyncError, SyncResult,
    TargetUser, UserId,
};

use crate::config::GitlabConfig;
use crate::error::{GitlabError, GitlabResult};
use crate::types::{AddMemberRequest, Group, Member, User};

const PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// GitLab REST API client.
#[derive(Debug, Clone)]
pub struct GitlabClient {
    config: GitlabConfig,
    http_client: reqwest::Client,
}

impl GitlabClient {
    /// Create a new GitLab client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: GitlabConfig) -> GitlabResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| GitlabError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self::with_http_client(config, http_client))
    }

    /// Create a client with a pre-built `reqwest::Client` (for testing).
    #[must_use]
    pub fn with_http_client(config: GitlabConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v4/{}", self.config.base_url, path)
    }

    /// Resolve a group by numeric id or full path.
    pub async fn get_group(&self, id_or_path: &str) -> GitlabResult<Group> {
        let encoded = encode_path_component(id_or_path);
        self.get(&self.api_url(&format!("groups/{encoded}")), &[])
            .await
    }

    /// List the group's entire membership, including inherited members,
    /// paginated to exhaustion.
    pub async fn list_all_group_members(&self, group_id: i64) -> GitlabResult<Vec<Member>> {
        let url = self.api_url(&format!("groups/{group_id}/members/all"));
        let per_page = self.config.per_page;
        let mut members: Vec<Member> = Vec::new();
        let mut page: u32 = 1;

        loop {
            let page_param = page.to_string();
            let per_page_param = per_page.to_string();
            let batch: Vec<Member> = self
                .get(
                    &url,
                    &[("page", page_param.as_str()), ("per_page", per_page_param.as_str())],
                )
                .await?;
            let len = batch.len();
            members.extend(batch);
            if len < per_page as usize {
                break;
            }
            page += 1;
        }

        debug!(group_id, members = members.len(), "listed group membership");
        Ok(members)
    }

    /// Remove a member from a group.
    pub async fn remove_group_member(&self, group_id: i64, member_id: i64) -> GitlabResult<()> {
        let url = self.api_url(&format!("groups/{group_id}/members/{member_id}"));
        let response = self
            .http_client
            .delete(&url)
            .header(PRIVATE_TOKEN_HEADER, &self.config.token)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Look up users by exact username. GitLab's `username` filter matches
    /// exactly; zero, one, or (in principle) many results.
    pub async fn find_users_by_username(&self, username: &str) -> GitlabResult<Vec<User>> {
        self.get(&self.api_url("users"), &[("username", username)])
            .await
    }

    /// Add a user to a group at the given access level.
    pub async fn add_group_member(
        &self,
        group_id: i64,
        user_id: i64,
        access_level: u32,
    ) -> GitlabResult<()> {
        let url = self.api_url(&format!("groups/{group_id}/members"));
        let body = AddMemberRequest {
            user_id,
            access_level,
        };
        let response = self
            .http_client
            .post(&url)
            .header(PRIVATE_TOKEN_HEADER, &self.config.token)
            .json(&body)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> GitlabResult<T> {
        let response = self
            .http_client
            .get(url)
            .query(query)
            .header(PRIVATE_TOKEN_HEADER, &self.config.token)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Map non-success statuses to [`GitlabError::Api`], pulling the
    /// `message`/`error` field out of GitLab's error body when present.
    async fn check_status(response: reqwest::Response) -> GitlabResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .map(|m| match m.as_str() {
                        Some(s) => s.to_string(),
                        None => m.to_string(),
                    })
            })
            .unwrap_or(body);

        Err(GitlabError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Percent-encode a group path for use as a single URL component; group
/// full paths contain `/`.
fn encode_path_component(raw: &str) -> String {
    raw.replace('%', "%25").replace('/', "%2F")
}

#[async_trait]
impl GroupService for GitlabClient {
    async fn get_group(&self, group_id: &str) -> SyncResult<GroupHandle> {
        let group = GitlabClient::get_group(self, group_id)
            .await
            .map_err(SyncError::target)?;
        Ok(GroupHandle {
            id: group.id,
            name: group.name,
        })
    }

    async fn list_all_members(&self, group: &GroupHandle) -> SyncResult<Vec<GroupMember>> {
        let members = self
            .list_all_group_members(group.id)
            .await
            .map_err(SyncError::target)?;
        Ok(members
            .into_iter()
            .map(|m| GroupMember {
                username: m.username,
                id: m.id,
            })
            .collect())
    }

    async fn remove_member(&self, group: &GroupHandle, member_id: MemberId) -> SyncResult<()> {
        self.remove_group_member(group.id, member_id)
            .await
            .map_err(SyncError::target)
    }

    async fn find_users_by_username(&self, username: &str) -> SyncResult<Vec<TargetUser>> {
        let users = GitlabClient::find_users_by_username(self, username)
            .await
            .map_err(SyncError::target)?;
        Ok(users
            .into_iter()
            .map(|u| TargetUser {
                id: u.id,
                username: u.username,
            })
            .collect())
    }

    async fn add_member(
        &self,
        group: &GroupHandle,
        user_id: UserId,
        access_level: AccessLevel,
    ) -> SyncResult<()> {
        self.add_group_member(group.id, user_id, access_level.as_u32())
            .await
            .map_err(SyncError::target)
    }
}
