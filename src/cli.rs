// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// repo-scribe is deliberately argument-less: everything it needs comes from
// the environment (see src/config.rs). We still go through clap so the
// binary answers --help and --version properly instead of ignoring them.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "repo-scribe",
    version,
    about = "Writes a text report of your GitHub profile and public repositories",
    long_about = "repo-scribe fetches the authenticated user's GitHub profile and their \
                  public repository list, then writes a formatted text report to \
                  <login>.txt in the current directory. Configuration comes from the \
                  GITHUB_API_URL and TOKEN environment variables (a local .env file \
                  is honored)."
)]
pub struct Cli {}
