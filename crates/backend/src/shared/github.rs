//! GitHub source collection
//!
//! Stateless replacement for cloning the repository: resolve the default
//! branch, walk the recursive git tree and fetch raw contents for the files
//! that pass the relevance policy.

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::readme::source::{self, SourceFile};
use crate::system::config;

const API_BASE: &str = "https://api.github.com";

/// Hard cap on the number of files quoted per repository.
const MAX_FILES: usize = 40;

static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        // GitHub rejects requests without a user agent.
        .user_agent("readme-generator")
        .build()
        .expect("failed to build HTTP client")
});

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("repository {0} not found")]
    NotFound(String),

    #[error("GitHub rate limit exceeded")]
    RateLimited,

    #[error("GitHub API error: HTTP {0}")]
    Api(u16),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct RepoInfo {
    default_branch: String,
}

#[derive(Debug, Deserialize)]
struct TreeResponse {
    tree: Vec<TreeEntry>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Debug, Deserialize)]
struct TreeEntry {
    path: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    size: u64,
}

/// Fetch the contents of every relevant file in `profile/repo`.
pub async fn fetch_repo_sources(
    profile: &str,
    repo: &str,
) -> Result<Vec<SourceFile>, GithubError> {
    let coordinates = format!("{profile}/{repo}");
    let branch = fetch_default_branch(&coordinates).await?;
    let tree = fetch_tree(&coordinates, &branch).await?;
    if tree.truncated {
        tracing::warn!("git tree for {} is truncated, summarizing a partial view", coordinates);
    }

    let mut files = Vec::new();
    for entry in select_entries(&tree) {
        match fetch_raw_file(&coordinates, &entry.path).await {
            Ok(content) => files.push(SourceFile {
                path: entry.path.clone(),
                content,
            }),
            Err(err) => {
                // A single unreadable file does not fail the whole run.
                tracing::warn!("skipping {}: {}", entry.path, err);
            }
        }
    }
    Ok(files)
}

fn select_entries(tree: &TreeResponse) -> Vec<&TreeEntry> {
    tree.tree
        .iter()
        .filter(|entry| entry.kind == "blob" && source::is_relevant(&entry.path, entry.size))
        .take(MAX_FILES)
        .collect()
}

async fn fetch_default_branch(coordinates: &str) -> Result<String, GithubError> {
    let url = format!("{API_BASE}/repos/{coordinates}");
    let resp = get(&url, "application/vnd.github+json", coordinates).await?;
    let info: RepoInfo = resp.json().await?;
    Ok(info.default_branch)
}

async fn fetch_tree(coordinates: &str, branch: &str) -> Result<TreeResponse, GithubError> {
    let url = format!("{API_BASE}/repos/{coordinates}/git/trees/{branch}?recursive=1");
    let resp = get(&url, "application/vnd.github+json", coordinates).await?;
    Ok(resp.json().await?)
}

async fn fetch_raw_file(coordinates: &str, path: &str) -> Result<String, GithubError> {
    let url = format!("{API_BASE}/repos/{coordinates}/contents/{path}");
    let resp = get(&url, "application/vnd.github.raw+json", coordinates).await?;
    Ok(resp.text().await?)
}

async fn get(
    url: &str,
    accept: &str,
    coordinates: &str,
) -> Result<reqwest::Response, GithubError> {
    let mut request = CLIENT.get(url).header("Accept", accept);
    if let Some(token) = &config::get().github_token {
        request = request.bearer_auth(token);
    }

    let resp = request.send().await?;
    match resp.status().as_u16() {
        200 => Ok(resp),
        404 => Err(GithubError::NotFound(coordinates.to_owned())),
        403 | 429 => Err(GithubError::RateLimited),
        status => Err(GithubError::Api(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE_FIXTURE: &str = r#"{
        "sha": "abc",
        "tree": [
            {"path": "src", "type": "tree"},
            {"path": "src/main.rs", "type": "blob", "size": 512},
            {"path": "assets/logo.png", "type": "blob", "size": 128},
            {"path": "node_modules/x/index.js", "type": "blob", "size": 64},
            {"path": "README.md", "type": "blob", "size": 2048}
        ],
        "truncated": false
    }"#;

    #[test]
    fn tree_response_decodes_github_payloads() {
        let tree: TreeResponse = serde_json::from_str(TREE_FIXTURE).unwrap();
        assert_eq!(tree.tree.len(), 5);
        assert!(!tree.truncated);
        assert_eq!(tree.tree[1].path, "src/main.rs");
        assert_eq!(tree.tree[1].size, 512);
    }

    #[test]
    fn only_relevant_blobs_are_selected() {
        let tree: TreeResponse = serde_json::from_str(TREE_FIXTURE).unwrap();
        let selected: Vec<&str> = select_entries(&tree)
            .iter()
            .map(|entry| entry.path.as_str())
            .collect();
        assert_eq!(selected, vec!["src/main.rs", "README.md"]);
    }

    #[test]
    fn repo_info_decodes_default_branch() {
        let info: RepoInfo =
            serde_json::from_str(r#"{"name": "hello-world", "default_branch": "main"}"#).unwrap();
        assert_eq!(info.default_branch, "main");
    }
}
