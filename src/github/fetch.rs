// src/github/fetch.rs
// =============================================================================
// This module performs the two HTTP calls against the GitHub REST API.
//
// Strategy:
// - One shared reqwest::Client, built once in main and reused for both calls
// - GET <base>/user with the bearer token: the caller's own profile
// - GET <base>/users/<login>/repos without the token: public repo listing
// - Only the first page of repositories is consumed; no pagination
//
// Both fetches return Result, so a transport failure or a bad status code
// reaches the caller as a typed error. The caller has to branch on it before
// it can touch any field, which keeps failure values out of the report text.
// =============================================================================

use anyhow::{Context, Result};
use reqwest::Client;

use super::models::{RepoSummary, UserProfile};
use crate::config::Config;

/// Creates the HTTP client shared by both API calls.
///
/// GitHub rejects requests without a User-Agent, and the Accept header opts
/// into the stable v3 JSON media type. No timeout is configured: a run
/// blocks until the remote end answers.
pub fn build_client() -> Result<Client> {
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("repo-scribe"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

    Client::builder()
        .default_headers(headers)
        .build()
        .context("Failed to build HTTP client")
}

/// Fetches the authenticated user's profile from `<base>/user`.
///
/// This is the only call that sends the bearer credential.
pub async fn fetch_authenticated_user(client: &Client, config: &Config) -> Result<UserProfile> {
    let url = format!("{}/user", config.github_api_url);

    let response = client
        .get(&url)
        .bearer_auth(&config.token)
        .send()
        .await
        .with_context(|| format!("Request to {url} failed"))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("GitHub API error ({status}): {body}");
    }

    response
        .json::<UserProfile>()
        .await
        .context("Failed to deserialize user profile")
}

/// Fetches a user's public repositories from `<base>/users/<login>/repos`.
///
/// The listing is public, so the bearer credential is deliberately not sent.
/// The repositories come back in whatever order the API chose; we keep it.
pub async fn fetch_user_repos(
    client: &Client,
    config: &Config,
    username: &str,
) -> Result<Vec<RepoSummary>> {
    let url = format!("{}/users/{username}/repos", config.github_api_url);

    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Request to {url} failed"))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("GitHub API error ({status}): {body}");
    }

    response
        .json::<Vec<RepoSummary>>()
        .await
        .context("Failed to deserialize repository list")
}
