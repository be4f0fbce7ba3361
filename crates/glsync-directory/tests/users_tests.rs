//! Integration tests for the paginated user listing, against a mock
//! Directory API server.

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use glsync_core::{expected_members, DirectorySource};
use glsync_directory::{
    DirectoryClient, DirectoryConfig, DirectoryCredentials, DirectoryError,
};

fn client_for(server: &MockServer) -> DirectoryClient {
    let config = DirectoryConfig::new("C0000001").with_base_url(server.uri());
    DirectoryClient::with_http_client(
        config,
        DirectoryCredentials::Bearer {
            token: "test-token".into(),
        },
        reqwest::Client::new(),
    )
}

#[tokio::test]
async fn listing_follows_page_tokens_to_exhaustion() {
    let server = MockServer::start().await;

    let page_two = create_users_page(
        vec![create_directory_user("carol", "carol"), create_plain_user("dan")],
        None,
    );
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("pageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_two))
        .mount(&server)
        .await;

    let page_one = create_users_page(
        vec![
            create_directory_user("alice", "alice"),
            create_directory_user("bob", "bob-gl"),
        ],
        Some("page-2"),
    );
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("customer", "C0000001"))
        .and(query_param("query", "isSuspended=false"))
        .and(query_param("projection", "full"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_one))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let users = client.list_active_users().await.unwrap();
    assert_eq!(users.len(), 4);

    // Through the DirectorySource seam: four accounts, three with the
    // attribute populated.
    let accounts = client.list_active_accounts().await.unwrap();
    let expected = expected_members(&accounts);
    assert_eq!(expected.len(), 3);
    assert_eq!(expected["bob-gl"], "bob@example.com");
    assert!(!expected.values().any(|email| email == "dan@example.com"));
}

#[tokio::test]
async fn single_page_listing_stops_without_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(create_users_page(vec![create_directory_user("solo", "solo")], None)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let users = client.list_active_users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].primary_email, "solo@example.com");
}

#[tokio::test]
async fn empty_domain_yields_no_users() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "admin#directory#users"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let users = client.list_active_users().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn api_error_surfaces_status_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(create_error_body(403, "Not Authorized to access this resource")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.list_active_users().await.unwrap_err();
    match err {
        DirectoryError::Api { status, message } => {
            assert_eq!(status, 403);
            assert!(message.contains("Not Authorized"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_errors_propagate_through_the_source_seam() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.list_active_accounts().await.unwrap_err();
    assert!(!err.is_guard());
    assert!(err.to_string().contains("directory error"));
}
