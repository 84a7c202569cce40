// src/config.rs
// =============================================================================
// Process configuration, loaded once at startup.
//
// Sources, in order:
// 1. A .env file in the current directory (optional, loaded via dotenvy)
// 2. The host environment
//
// The result is an explicit Config value that gets passed to the fetch
// functions. Nothing else in the program reads environment variables, which
// keeps the HTTP layer testable against a local mock server: tests construct
// a Config pointing at whatever base URL they want.
// =============================================================================

use anyhow::{Context, Result};
use serde::Deserialize;

// Field names map to the SCREAMING_SNAKE_CASE environment variable names,
// so `github_api_url` is filled from GITHUB_API_URL and `token` from TOKEN.
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Base URL of the GitHub REST API (e.g., https://api.github.com)
    pub github_api_url: String,

    /// Bearer credential for the authenticated /user call
    pub token: String,
}

impl Config {
    /// Loads the configuration from the environment.
    ///
    /// A missing or empty variable is a startup error rather than a request
    /// that fails remotely later with a confusing message.
    pub fn from_env() -> Result<Self> {
        // Load .env if present; a missing file is fine
        dotenvy::dotenv().ok();

        envy::from_env::<Self>()
            .context("Failed to load configuration (GITHUB_API_URL and TOKEN must be set)")
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why envy instead of reading variables by hand?
//    - std::env::var returns one string at a time with no overall picture
//    - envy deserializes the whole environment into our struct in one go
//    - Missing variables become one descriptive error instead of a panic
//      somewhere down the line
//
// 2. Why does from_env() not take the file path?
//    - dotenvy::dotenv() looks for .env starting at the current directory
//    - Variables already present in the environment win over the file,
//      which is the usual precedence for this kind of tool
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // envy::from_iter lets us test the mapping without touching the real
    // process environment (which is shared between parallel tests).
    #[test]
    fn test_config_maps_env_names() {
        let vars = vec![
            ("GITHUB_API_URL".to_string(), "https://api.github.com".to_string()),
            ("TOKEN".to_string(), "ghp_testtoken".to_string()),
        ];

        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.github_api_url, "https://api.github.com");
        assert_eq!(config.token, "ghp_testtoken");
    }

    #[test]
    fn test_config_missing_token_is_an_error() {
        let vars = vec![(
            "GITHUB_API_URL".to_string(),
            "https://api.github.com".to_string(),
        )];

        let result = envy::from_iter::<_, Config>(vars);
        assert!(result.is_err());
    }
}
