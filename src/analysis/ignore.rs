// Ignore filter shared by the tree walker and the source scan
//
// A plain case-insensitive substring test against a fixed token list.
// It is deliberately loose: "venv" also hides "myvenv_tools".

use std::path::Path;

/// Tokens that hide any path containing them
pub const IGNORE_TOKENS: &[&str] = &[
    ".git",
    "__pycache__",
    "node_modules",
    ".venv",
    "venv",
    ".pytest_cache",
    ".mypy_cache",
    ".idea",
    ".vscode",
    ".pyc",
    ".pyo",
    ".pyd",
    ".ds_store",
    "thumbs.db",
];

/// Check if a path should be skipped
pub fn should_ignore(path: &Path) -> bool {
    let lower = path.to_string_lossy().to_lowercase();
    IGNORE_TOKENS.iter().any(|token| lower.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_vcs_and_caches() {
        assert!(should_ignore(Path::new("repo/.git")));
        assert!(should_ignore(Path::new("repo/.git/objects/ab")));
        assert!(should_ignore(Path::new("src/__pycache__/mod.cpython-311.pyc")));
        assert!(should_ignore(Path::new("web/node_modules/react")));
        assert!(should_ignore(Path::new(".mypy_cache")));
    }

    #[test]
    fn test_ignores_junk_files() {
        assert!(should_ignore(Path::new("pkg/mod.pyc")));
        assert!(should_ignore(Path::new("pkg/ext.pyd")));
        assert!(should_ignore(Path::new("assets/.DS_Store")));
        assert!(should_ignore(Path::new("photos/Thumbs.db")));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(should_ignore(Path::new("Project/.GIT/config")));
        assert!(should_ignore(Path::new("NODE_MODULES")));
        assert!(should_ignore(Path::new("env/VENV/bin")));
        assert!(should_ignore(Path::new(".VsCode/settings.json")));
    }

    #[test]
    fn test_keeps_source_files() {
        assert!(!should_ignore(Path::new("src/main.py")));
        assert!(!should_ignore(Path::new("docs/README.md")));
        assert!(!should_ignore(Path::new("pkg/__init__.py")));
    }

    #[test]
    fn test_substring_match_is_loose() {
        // ".gitignore" contains ".git"
        assert!(should_ignore(Path::new(".gitignore")));
        assert!(should_ignore(Path::new("tools/myvenv_helpers.py")));
    }

    #[test]
    fn test_every_token_matches_itself() {
        for token in IGNORE_TOKENS {
            assert!(should_ignore(Path::new(token)), "{token}");
            assert!(should_ignore(Path::new(&token.to_uppercase())), "{token}");
        }
    }
}
