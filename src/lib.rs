//! Codesketch - summarize a Python codebase as Mermaid diagrams
//!
//! Fetches a repository (or takes a local directory), walks its file tree,
//! extracts top-level functions, classes and imports with tree-sitter, and
//! renders the result as fenced Mermaid blocks for generated documentation.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod repo;

// Re-export main types
pub use analysis::{
    build_tree, read_readme, should_ignore, Analyzer, CodebaseAnalysis, NodeKind, TreeNode,
};
pub use config::Config;
pub use error::{Error, Result};
pub use output::{
    architecture_diagram, class_hierarchy_diagram, function_call_diagram, render_markdown,
    tree_diagram, DocumentOptions,
};
pub use parser::{Declaration, FileAnalysis, ImportRecord, PythonParser};
pub use repo::{cleanup, repository_name, validate_url, GitCli, GitClient, RepoFetcher};
