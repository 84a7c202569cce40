// src/github/mod.rs
// =============================================================================
// This module handles talking to the GitHub REST API.
//
// Submodules:
// - models: typed views of the API responses we care about
// - fetch: the two HTTP calls (authenticated profile, public repo list)
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers write `github::fetch_authenticated_user()` without knowing about
// our internal file layout.
// =============================================================================

mod fetch;
mod models;

// Re-export public items from submodules
pub use fetch::{build_client, fetch_authenticated_user, fetch_user_repos};
pub use models::{RepoSummary, UserProfile};
