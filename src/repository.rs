//! Repository metadata derivation for CI reporting.
//!
//! Derives the repository slug and tag that a manifest submission is
//! reported under. Everything here is pure string work over values the
//! caller already has (a remote URL, a ref, paths); running git or
//! reading CI environment variables is the caller's business.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

static HTTPS_URL_PATTERN: OnceLock<Regex> = OnceLock::new();
static SSH_URL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn https_url_pattern() -> &'static Regex {
    HTTPS_URL_PATTERN.get_or_init(|| {
        Regex::new(r"^https://github\.com/(.+/.+)\.git$").expect("invalid https remote pattern")
    })
}

fn ssh_url_pattern() -> &'static Regex {
    SSH_URL_PATTERN.get_or_init(|| {
        Regex::new(r"^git@github\.com:(.+/.+)\.git$").expect("invalid ssh remote pattern")
    })
}

/// Repository metadata attached to a manifest submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    slug: String,
    tag: Option<String>,
}

impl RepositoryInfo {
    /// Derives repository metadata from a git remote URL and an optional ref.
    ///
    /// Returns `None` when the remote URL is not a recognizable GitHub
    /// remote, or when no remote URL is available at all.
    pub fn detect(remote_url: Option<&str>, git_ref: Option<&str>) -> Option<Self> {
        let slug = parse_slug(remote_url?)?;
        let tag = git_ref.and_then(tag_from_ref);
        Some(Self { slug, tag })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

/// Extracts the `owner/repo` slug from a GitHub remote URL.
///
/// Both the https form (`https://github.com/owner/repo.git`) and the ssh
/// form (`git@github.com:owner/repo.git`) are recognized.
pub fn parse_slug(remote_url: &str) -> Option<String> {
    let remote_url = remote_url.trim();

    if let Some(captures) = https_url_pattern().captures(remote_url) {
        return Some(captures[1].to_string());
    }

    if let Some(captures) = ssh_url_pattern().captures(remote_url) {
        return Some(captures[1].to_string());
    }

    None
}

/// Extracts the tag name from a fully-qualified ref string.
///
/// Only `refs/tags/...` refs carry a tag; branch refs return `None`.
pub fn tag_from_ref(git_ref: &str) -> Option<String> {
    git_ref
        .strip_prefix("refs/tags/")
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
}

/// Computes a build file's location relative to the repository toplevel.
///
/// Used as the manifest's `source_location`. Falls back to the full
/// build-file path when it does not live under the toplevel.
pub fn relative_source_location(build_file: &Path, toplevel: &Path) -> String {
    let relative = build_file.strip_prefix(toplevel).unwrap_or(build_file);
    let location = relative.to_string_lossy();
    location.trim_start_matches('/').to_string()
}
