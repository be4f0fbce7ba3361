//! glsync - reconciles GitLab group membership against a Google Workspace
//! directory.
//!
//! One pass per invocation: fetch the expected membership from the
//! directory, fetch the actual membership from the group, diff, and
//! converge. Exits non-zero on any fatal error, including the
//! empty-intersection safety guard.

use tracing_subscriber::EnvFilter;

use glsync_core::{run_sync, TracingObserver};
use glsync_directory::{
    DirectoryClient, DirectoryConfig, DirectoryCredentials, ServiceAccountKey,
};
use glsync_gitlab::{GitlabClient, GitlabConfig};

mod config;

use config::SyncConfig;

#[tokio::main]
async fn main() {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = SyncConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    });

    let key = ServiceAccountKey::from_file(&config.google_credentials_path).unwrap_or_else(|e| {
        eprintln!("Credentials error: {e}");
        std::process::exit(1);
    });

    let directory = DirectoryClient::new(
        DirectoryConfig::new(&config.google_customer_id),
        DirectoryCredentials::ServiceAccount {
            key,
            subject: config.google_administrator_email.clone(),
        },
    )
    .unwrap_or_else(|e| {
        eprintln!("Directory client error: {e}");
        std::process::exit(1);
    });

    let mut gitlab_config = GitlabConfig::new(&config.gitlab_token);
    if let Some(url) = &config.gitlab_url {
        gitlab_config = gitlab_config.with_base_url(url);
    }
    let gitlab = GitlabClient::new(gitlab_config).unwrap_or_else(|e| {
        eprintln!("GitLab client error: {e}");
        std::process::exit(1);
    });

    tracing::info!(
        group = %config.gitlab_group,
        access_level = %config.access_level,
        "starting membership reconciliation"
    );

    match run_sync(
        &directory,
        &gitlab,
        &config.gitlab_group,
        config.access_level,
        &TracingObserver,
    )
    .await
    {
        Ok(outcome) => {
            tracing::info!(
                removed = outcome.removed,
                added = outcome.added,
                skipped = outcome.skipped,
                "membership reconciliation complete"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "membership reconciliation failed");
            std::process::exit(1);
        }
    }
}
