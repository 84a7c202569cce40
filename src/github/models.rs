// src/github/models.rs
// =============================================================================
// Typed views of the GitHub API responses.
//
// We only declare the fields the report needs; serde ignores everything else
// in the response. A response missing one of these fields fails
// deserialization, which is exactly the behavior we want: either the data
// required for the report is there, or the fetch errors out.
// =============================================================================

use serde::Deserialize;

/// The authenticated account's profile from the `/user` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    /// Unique account handle, also used as the report file name
    pub login: String,
    /// Display name; GitHub returns null when the user never set one
    pub name: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
}

/// One repository entry from the `/users/{login}/repos` listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    /// Source-control URL form of the repository address
    pub svn_url: String,
}
