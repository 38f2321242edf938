//! Source relevance policy
//!
//! Decides which repository files are worth quoting in the summarization
//! prompt: skips hidden paths, dependency and build directories,
//! binary/asset/lock extensions and anything too large to quote.

/// Files at or above this size are never quoted.
pub const MAX_FILE_BYTES: u64 = 100 * 1024;

const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    "target",
    "dist",
    "build",
    "out",
    "vendor",
    "__pycache__",
    "venv",
    "coverage",
];

const IGNORED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "ico", "svg", "lock", "json", "woff", "woff2", "ttf", "pdf",
];

const IGNORED_FILES: &[&str] = &["package-lock.json", "yarn.lock", "_redirects"];

/// A repository file selected for the prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

/// Whether the file at `path` (slash-separated, relative to the repository
/// root) should be quoted. `size` comes from the git tree entry.
pub fn is_relevant(path: &str, size: u64) -> bool {
    if size >= MAX_FILE_BYTES {
        return false;
    }

    let mut segments = path.split('/').peekable();
    let mut file_name = "";
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            file_name = segment;
            break;
        }
        // Hidden and dependency directories are skipped wholesale.
        if segment.starts_with('.') || IGNORED_DIRS.contains(&segment) {
            return false;
        }
    }

    if file_name.is_empty() || file_name.starts_with('.') {
        return false;
    }
    if IGNORED_FILES.contains(&file_name) {
        return false;
    }

    match file_name.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_ascii_lowercase();
            !IGNORED_EXTENSIONS.contains(&ext.as_str())
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_sources_are_relevant() {
        assert!(is_relevant("src/main.rs", 1024));
        assert!(is_relevant("README.md", 2048));
        assert!(is_relevant("Makefile", 100));
        assert!(is_relevant("docs/usage.MD", 100));
    }

    #[test]
    fn dependency_and_hidden_directories_are_skipped() {
        assert!(!is_relevant("node_modules/react/index.js", 10));
        assert!(!is_relevant(".github/workflows/ci.yml", 10));
        assert!(!is_relevant("docs/.hidden/notes.txt", 10));
        assert!(!is_relevant("target/debug/build.rs", 10));
    }

    #[test]
    fn hidden_files_and_lockfiles_are_skipped() {
        assert!(!is_relevant(".gitignore", 10));
        assert!(!is_relevant("src/.env", 10));
        assert!(!is_relevant("package-lock.json", 10));
        assert!(!is_relevant("yarn.lock", 10));
    }

    #[test]
    fn asset_extensions_are_skipped() {
        assert!(!is_relevant("assets/logo.png", 10));
        assert!(!is_relevant("assets/LOGO.PNG", 10));
        assert!(!is_relevant("config/settings.json", 10));
        assert!(!is_relevant("Cargo.lock", 10));
    }

    #[test]
    fn oversized_files_are_skipped() {
        assert!(!is_relevant("src/generated.rs", MAX_FILE_BYTES));
        assert!(is_relevant("src/generated.rs", MAX_FILE_BYTES - 1));
    }
}
