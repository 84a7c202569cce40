// src/report/render.rs
// =============================================================================
// Builds the report text. The layout is fixed and consumers parse it by eye,
// so the exact bytes matter: indentation, line order, and the Portuguese
// labels are all part of the format.
// =============================================================================

use crate::github::{RepoSummary, UserProfile};

/// Renders the repository listing as a sequence of three-line blocks.
///
/// One block per repository, in the order the API returned them. An empty
/// listing renders as the empty string.
pub fn render_repo_list(repos: &[RepoSummary]) -> String {
    let mut out = String::new();

    for repo in repos {
        out.push_str(&format!(
            "  ID: {}\n  Nome: {}\n  url: {}\n",
            repo.id, repo.name, repo.svn_url
        ));
    }

    out
}

/// Assembles the full report: profile header plus the repository text.
///
/// The repository text is appended verbatim, with nothing added after it.
/// A profile without a display name renders the Nome line with an empty
/// value.
pub fn render_report(profile: &UserProfile, repo_list: &str) -> String {
    format!(
        "Nome: {}\n\
         Perfil: {}\n\
         Número de repositórios publicos: {}\n\
         Número de seguidores: {}\n\
         Número de usuários seguidos: {}\n\
         Lista da Repositórios:\n\
         {}",
        profile.name.as_deref().unwrap_or_default(),
        profile.login,
        profile.public_repos,
        profile.followers,
        profile.following,
        repo_list
    )
}
