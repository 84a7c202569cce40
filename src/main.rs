// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (--help/--version only)
// 2. Load configuration from .env / the environment
// 3. Fetch the authenticated user's profile
// 4. Fetch and render that user's public repository list
// 5. Write the combined report to <login>.txt
// 6. Exit with proper code (0 = success, 1 = error)
//
// The whole run is one linear sequence. The two network calls never overlap
// and there is no retry: the first failure ends the run.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - environment configuration
mod github; // src/github/ - GitHub API calls and models
mod report; // src/report/ - report rendering and file output

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(path) => {
            println!("✅ Report written to {}", path.display());
            0
        }
        Err(e) => {
            // {:#} prints the whole context chain on one line, so the
            // failing step and its cause both make it to the terminal
            eprintln!("Error: {e:#}");
            1
        }
    };

    std::process::exit(exit_code);
}

// The main application logic: fetch profile, fetch repos, write the report.
// Returns the path of the written report file.
async fn run() -> Result<PathBuf> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let _cli = cli::Cli::parse();

    // Configuration is loaded once here and passed down explicitly;
    // nothing below reads the environment
    let config = config::Config::from_env()?;
    let client = github::build_client()?;

    println!("🔍 Fetching authenticated user profile...");
    let profile = github::fetch_authenticated_user(&client, &config).await?;
    println!("👤 Logged in as {}", profile.login);

    println!("📦 Listing public repositories for {}...", profile.login);
    let repos = github::fetch_user_repos(&client, &config, &profile.login).await?;
    println!("   Found {} public repo(s)", repos.len());

    let repo_list = report::render_repo_list(&repos);
    let content = report::render_report(&profile, &repo_list);

    report::write_report(Path::new("."), &profile.login, &content)
}
