//! Integration tests for the GitLab client, against a mock API server.

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use glsync_gitlab::{GitlabClient, GitlabConfig, GitlabError};

fn client_for(server: &MockServer, per_page: u32) -> GitlabClient {
    let mut config = GitlabConfig::new("glpat-test").with_base_url(server.uri());
    config.per_page = per_page;
    GitlabClient::with_http_client(config, reqwest::Client::new())
}

#[tokio::test]
async fn get_group_resolves_by_numeric_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/groups/42"))
        .and(header("PRIVATE-TOKEN", "glpat-test"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(create_group(42, "Platform", "acme/platform")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    let group = client.get_group("42").await.unwrap();
    assert_eq!(group.id, 42);
    assert_eq!(group.name, "Platform");
    assert_eq!(group.full_path, "acme/platform");
}

#[tokio::test]
async fn member_listing_drains_every_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/groups/42/members/all"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            create_member(1, "alice"),
            create_member(2, "bob"),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v4/groups/42/members/all"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([create_member(3, "carol")])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, 2);
    let members = client.list_all_group_members(42).await.unwrap();
    assert_eq!(members.len(), 3);
    assert_eq!(members[2].username, "carol");
}

#[tokio::test]
async fn member_listing_handles_exact_page_boundary() {
    let server = MockServer::start().await;

    // Page 1 is exactly full, page 2 is empty: the drain must stop after
    // the empty page, not loop.
    Mock::given(method("GET"))
        .and(path("/api/v4/groups/42/members/all"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            create_member(1, "alice"),
            create_member(2, "bob"),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v4/groups/42/members/all"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 2);
    let members = client.list_all_group_members(42).await.unwrap();
    assert_eq!(members.len(), 2);
}

#[tokio::test]
async fn user_lookup_passes_the_exact_username() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/users"))
        .and(query_param("username", "erin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            create_user(10, "erin"),
            create_user(20, "erin"),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v4/users"))
        .and(query_param("username", "ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    let found = client.find_users_by_username("erin").await.unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].id, 10);

    let missing = client.find_users_by_username("ghost").await.unwrap();
    assert!(missing.is_empty());
}

#[tokio::test]
async fn add_member_posts_user_id_and_access_level() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v4/groups/42/members"))
        .and(header("PRIVATE-TOKEN", "glpat-test"))
        .and(body_json(json!({ "user_id": 77, "access_level": 30 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(create_member(77, "bob")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    client.add_group_member(42, 77, 30).await.unwrap();
}

#[tokio::test]
async fn remove_member_deletes_the_membership() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v4/groups/42/members/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    client.remove_group_member(42, 3).await.unwrap();
}

#[tokio::test]
async fn api_errors_carry_gitlab_message() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v4/groups/42/members/3"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "message": "403 Forbidden" })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, 100);
    let err = client.remove_group_member(42, 3).await.unwrap_err();
    match err {
        GitlabError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "403 Forbidden");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
